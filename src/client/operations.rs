//! Named service operations.

use super::core::ContentaGenClient;
use crate::operation::{self, Operation};
use crate::stream::AssistantStream;
use crate::types::{
    Author, AuthorParams, ContentImage, ContentImageParams, ContentList, ContentRecord,
    ContentSlugParams, ListContentByAgentParams, StreamAssistantParams,
};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

fn args<P: Serialize>(params: &P) -> Result<Value> {
    Ok(serde_json::to_value(params)?)
}

impl ContentaGenClient {
    /// Every operation this client can run.
    pub fn operations(&self) -> &'static [&'static Operation] {
        &operation::OPERATIONS
    }

    /// List an agent's content, newest first, one page at a time.
    pub async fn list_content_by_agent(&self, params: &ListContentByAgentParams) -> Result<ContentList> {
        self.call(&operation::LIST_CONTENT_BY_AGENT, args(params)?).await
    }

    pub async fn get_content_by_slug(&self, params: &ContentSlugParams) -> Result<ContentRecord> {
        self.call(&operation::GET_CONTENT_BY_SLUG, args(params)?).await
    }

    /// Slugs of content related to `params.slug`.
    pub async fn get_related_slugs(&self, params: &ContentSlugParams) -> Result<Vec<String>> {
        self.call(&operation::GET_RELATED_SLUGS, args(params)?).await
    }

    pub async fn get_author_by_agent_id(&self, params: &AuthorParams) -> Result<Author> {
        self.call(&operation::GET_AUTHOR_BY_AGENT_ID, args(params)?).await
    }

    /// `Ok(None)` when the content has no image.
    pub async fn get_content_image(&self, params: &ContentImageParams) -> Result<Option<ContentImage>> {
        self.call(&operation::GET_CONTENT_IMAGE, args(params)?).await
    }

    /// Validate the arguments and return a stream of reply fragments.
    ///
    /// Fails synchronously with `InvalidInput`; nothing is sent until the
    /// stream is polled.
    pub fn stream_assistant_response(&self, params: &StreamAssistantParams) -> Result<AssistantStream> {
        self.stream(&operation::STREAM_ASSISTANT_RESPONSE, &args(params)?)
    }
}
