use crate::{Payload, Result as WsErrorResult};

use tl_core::PostEvent;

use async_trait::async_trait;

/// Turns timeline state into transport payloads.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Rendered once per connection, right after registration.
    async fn render_snapshot(&self) -> WsErrorResult<Payload>;

    fn render_event(&self, event: &PostEvent) -> WsErrorResult<Payload>;
}
