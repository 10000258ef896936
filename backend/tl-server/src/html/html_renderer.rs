use super::pages;

use tl_core::PostEvent;
use tl_db::PostRepository;
use tl_ws::{Payload, Renderer, Result as WsErrorResult, WsError};

use async_trait::async_trait;

/// Renders timeline sockets as htmx fragments.
pub struct HtmlRenderer {
    posts: PostRepository,
    snapshot_limit: u32,
}

impl HtmlRenderer {
    pub fn new(posts: PostRepository, snapshot_limit: u32) -> Self {
        Self {
            posts,
            snapshot_limit,
        }
    }
}

#[async_trait]
impl Renderer for HtmlRenderer {
    async fn render_snapshot(&self) -> WsErrorResult<Payload> {
        let recent = self
            .posts
            .list_recent(self.snapshot_limit)
            .await
            .map_err(|e| WsError::render(format!("Loading recent posts failed: {e}")))?;

        Ok(Payload::new(pages::timeline_snapshot(&recent)))
    }

    fn render_event(&self, event: &PostEvent) -> WsErrorResult<Payload> {
        Ok(Payload::new(pages::timeline_post(event)))
    }
}
