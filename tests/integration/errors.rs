//! Integration tests for error classification

use crate::mock_server::{nested, procedure, MockServerFixture, AGENT_ID};
use contentagen_sdk::{
    create_sdk, AuthorParams, ContentImageParams, ContentSlugParams, Error, ListContentByAgentParams,
    SdkConfig, SdkErrorCode,
};
use serde_json::json;

#[tokio::test]
async fn test_missing_api_key() {
    let err = create_sdk(SdkConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingApiKey));
    assert_eq!(err.code(), Some(SdkErrorCode::MissingApiKey));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_server() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable().await;

    let params = ListContentByAgentParams::new(["not-a-uuid"], ["published"]).with_limit(0);
    let err = fixture.client().list_content_by_agent(&params).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.code(), Some(SdkErrorCode::InvalidInput));
    let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["status[0]", "agentId[0]", "limit"]);
    let message = err.to_string();
    assert!(message.starts_with("SDK_E004: Invalid input."), "{message}");
    assert!(message.contains("listContentByAgent"), "{message}");
}

#[tokio::test]
async fn test_empty_content_id_is_rejected() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable().await;

    let err = fixture
        .client()
        .get_content_image(&ContentImageParams::new(""))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.to_string().contains("Content ID is required."));
}

#[tokio::test]
async fn test_server_error_carries_status_text() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(&procedure("getContentBySlug"), 500, r#"{"message":"boom"}"#)
        .await;

    let err = fixture
        .client()
        .get_content_by_slug(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ApiRequestFailed { status: 500, .. }));
    let message = err.to_string();
    assert!(message.starts_with("SDK_E002: API request failed"), "{message}");
    assert!(message.contains("Internal Server Error"), "{message}");
    assert!(message.contains("boom"), "{message}");
}

#[tokio::test]
async fn test_not_found_in_rest_layout() {
    let fixture = MockServerFixture::new().await;
    let path = format!("/sdk/author/{}", AGENT_ID);
    let _mock = fixture.mock_json(&path, 404, "").await;

    let err = fixture
        .rest_client()
        .get_author_by_agent_id(&AuthorParams::new(AGENT_ID))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "SDK_E002: API request failed (Not Found)");
}

#[tokio::test]
async fn test_malformed_json_is_a_serialization_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(&procedure("getRelatedSlugs"), 200, "<html>oops</html>")
        .await;

    let err = fixture
        .client()
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization(_)), "{err}");
}

#[tokio::test]
async fn test_shape_mismatch_is_invalid_response() {
    let fixture = MockServerFixture::new().await;
    let body = nested(json!({"posts": [{"id": "p"}], "total": "many"}));
    let _mock = fixture.mock_json(&procedure("listContentByAgent"), 200, &body).await;

    let params = ListContentByAgentParams::new([AGENT_ID], ["approved"]);
    let err = fixture.client().list_content_by_agent(&params).await.unwrap_err();

    assert_eq!(err.code(), Some(SdkErrorCode::InvalidApiResponse));
    let message = err.to_string();
    assert!(message.contains("posts[0].meta: Required"), "{message}");
    assert!(message.contains("total: expected number, received string"), "{message}");
}

#[tokio::test]
async fn test_null_author_is_invalid_response() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(&procedure("getAuthorByAgentId"), 200, &nested(serde_json::Value::Null))
        .await;

    let err = fixture
        .client()
        .get_author_by_agent_id(&AuthorParams::new(AGENT_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidApiResponse { .. }), "{err}");
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let client = contentagen_sdk::ContentaGenClient::builder()
        .api_key("k")
        .host("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err}");
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn test_non_standard_status_reads_unknown_status() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(&procedure("getRelatedSlugs"), 599, "")
        .await;

    let err = fixture
        .client()
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(599));
    assert_eq!(err.to_string(), "SDK_E002: API request failed (Unknown Status)");
}
