//! Integration tests for the batch (JSON) operations

use crate::mock_server::{nested, path, post_json, procedure, MockServerFixture, AGENT_ID, API_KEY};
use chrono::{TimeZone, Utc};
use contentagen_sdk::{
    AuthorParams, ContentImageParams, ContentMeta, ContentRecord, ContentRequest, ContentSlugParams,
    ContentStats, ContentStatus, ListContentByAgentParams,
};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_list_content_by_agent_single_post() {
    let fixture = MockServerFixture::new().await;
    let body = nested(json!({"posts": [post_json("post1", "2024-05-01T12:00:00.000Z")], "total": 1}));
    let mock = fixture
        .mock_procedure(
            "listContentByAgent",
            json!({"agentId": [AGENT_ID], "limit": 2, "page": 1, "status": ["draft"]}),
            &body,
        )
        .await;

    let params = ListContentByAgentParams::new([AGENT_ID], [ContentStatus::Draft])
        .with_limit(2)
        .with_page(1);
    let page = fixture.client().list_content_by_agent(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.total, 1);
    assert_eq!(page.posts.len(), 1);
    let post = &page.posts[0];
    assert_eq!(post.id, "post1");
    assert_eq!(post.status, ContentStatus::Draft);
    assert_eq!(post.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
}

#[tokio::test]
async fn test_list_defaults_are_sent_in_rest_layout() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_query(
            "/sdk/content",
            vec![("status", "draft,approved"), ("limit", "10"), ("page", "1")],
            r#"{"posts": [], "total": 0}"#,
        )
        .await;

    let params = ListContentByAgentParams::new([AGENT_ID], ["draft", "approved"]);
    let page = fixture.rest_client().list_content_by_agent(&params).await.unwrap();

    mock.assert_async().await;
    assert!(page.posts.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_get_content_by_slug() {
    let fixture = MockServerFixture::new().await;
    let record = json!({
        "id": "post1",
        "agentId": AGENT_ID,
        "imageUrl": "https://cdn.example.com/p.png",
        "body": "# Hello",
        "status": "approved",
        "meta": {"title": "Hello", "slug": "hello"},
        "request": {"description": "Write hello"},
        "stats": {"qualityScore": "0.9"},
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-03"
    });
    let mock = fixture
        .mock_procedure(
            "getContentBySlug",
            json!({"agentId": AGENT_ID, "slug": "hello"}),
            &nested(record),
        )
        .await;

    let content = fixture
        .client()
        .get_content_by_slug(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(content.body, "# Hello");
    assert_eq!(content.image_url.as_deref(), Some("https://cdn.example.com/p.png"));
    assert_eq!(content.updated_at, Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap());
}

#[tokio::test]
async fn test_content_record_round_trips_through_the_envelope() {
    let fixture = MockServerFixture::new().await;
    let original = ContentRecord {
        id: "post1".to_string(),
        agent_id: AGENT_ID.to_string(),
        image_url: None,
        body: "Olá, mundo".to_string(),
        status: ContentStatus::Approved,
        meta: ContentMeta {
            title: Some("Hello".to_string()),
            keywords: Some(vec!["rust".to_string(), "sdk".to_string()]),
            slug: Some("hello".to_string()),
            ..ContentMeta::default()
        },
        request: ContentRequest {
            description: "Write hello".to_string(),
        },
        stats: ContentStats {
            words_count: Some("2".to_string()),
            ..ContentStats::default()
        },
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
    };
    let served = serde_json::to_value(&original).unwrap();
    assert!(served["createdAt"].is_string());

    let _mock = fixture.mock_json(&procedure("getContentBySlug"), 200, &nested(served)).await;

    let fetched = fixture
        .client()
        .get_content_by_slug(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap();

    assert_eq!(fetched, original);
}

#[tokio::test]
async fn test_get_related_slugs() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_procedure(
            "getRelatedSlugs",
            json!({"agentId": AGENT_ID, "slug": "hello"}),
            &nested(json!(["a", "b"])),
        )
        .await;

    let slugs = fixture
        .client()
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_bare_array_without_envelope_is_rejected() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json(&procedure("getRelatedSlugs"), 200, r#"["a", "b"]"#).await;

    let err = fixture
        .client()
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, contentagen_sdk::Error::InvalidApiResponse { .. }), "{err}");
}

#[tokio::test]
async fn test_get_author_with_photo_in_rest_layout() {
    let fixture = MockServerFixture::new().await;
    let author_path = format!("/sdk/author/{}", AGENT_ID);
    let body = json!({"name": "Ana", "profilePhoto": {"image": "AQID", "contentType": "image/png"}});
    let mock = fixture.mock_json(&author_path, 200, &body.to_string()).await;

    let author = fixture
        .rest_client()
        .get_author_by_agent_id(&AuthorParams::new(AGENT_ID))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(author.name, "Ana");
    assert_eq!(author.profile_photo.unwrap().decode().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_author_without_photo() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_procedure(
            "getAuthorByAgentId",
            json!({"agentId": AGENT_ID}),
            &nested(json!({"name": "Ana", "profilePhoto": null})),
        )
        .await;

    let author = fixture
        .client()
        .get_author_by_agent_id(&AuthorParams::new(AGENT_ID))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(author.name, "Ana");
    assert!(author.profile_photo.is_none());
}

#[tokio::test]
async fn test_content_image_null_is_none() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_procedure(
            "getContentImage",
            json!({"contentId": "post1"}),
            &nested(serde_json::Value::Null),
        )
        .await;

    let image = fixture
        .client()
        .get_content_image(&ContentImageParams::new("post1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(image.is_none());
}

#[tokio::test]
async fn test_content_image_present() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            &procedure("getContentImage"),
            200,
            &nested(json!({"data": "aGVsbG8=", "contentType": "image/webp"})),
        )
        .await;

    let image = fixture
        .client()
        .get_content_image(&ContentImageParams::new("post1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(image.content_type, "image/webp");
    assert_eq!(image.decode().unwrap(), b"hello");
}

#[tokio::test]
async fn test_locale_header_is_forwarded() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", path(&procedure("getRelatedSlugs")))
            .match_header("sdk-api-key", API_KEY)
            .match_header("x-locale", "pt-BR")
            .with_status(200)
            .with_body(nested(json!([])))
            .create_async()
            .await
    };

    let client = fixture.builder().locale("pt-BR").build().unwrap();
    let slugs = client
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(slugs.is_empty());
}

#[tokio::test]
async fn test_no_locale_header_by_default() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", path(&procedure("getRelatedSlugs")))
            .match_header("x-locale", Matcher::Missing)
            .with_status(200)
            .with_body(nested(json!([])))
            .create_async()
            .await
    };

    fixture
        .client()
        .get_related_slugs(&ContentSlugParams::new("hello", AGENT_ID))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_execute_returns_normalized_node() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            &procedure("listContentByAgent"),
            200,
            &json!({"posts": [post_json("p", "2024-01-02T03:04:05Z")], "total": 1, "cursor": "abc"}).to_string(),
        )
        .await;

    let client = fixture.client();
    let node = client
        .execute(
            &contentagen_sdk::operation::LIST_CONTENT_BY_AGENT,
            &json!({"status": ["draft"], "agentId": [AGENT_ID], "extra": true}),
        )
        .await
        .unwrap();

    let value = node.into_json();
    assert_eq!(value["posts"][0]["createdAt"], "2024-01-02T03:04:05Z");
    assert_eq!(value["total"], 1);
    assert!(value.get("cursor").is_none());
}
