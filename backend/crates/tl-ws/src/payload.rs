use crate::Result as WsErrorResult;

use async_trait::async_trait;

/// Transport-ready message produced by a [`crate::Renderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Write half of a subscriber's transport.
///
/// Any error returned by `send` is treated as a disconnect.
#[async_trait]
pub trait PayloadSink: Send {
    async fn send(&mut self, payload: Payload) -> WsErrorResult<()>;

    /// Release the transport. Errors are ignored.
    async fn close(&mut self) {}
}
