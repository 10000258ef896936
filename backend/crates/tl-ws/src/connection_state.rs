use crate::SubscriberId;

/// Lifecycle of one subscriber connection. States only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Registered,
    Streaming,
    Closed,
}

/// Why a subscriber connection ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Registration was refused
    Rejected,
    /// Initial snapshot could not be rendered or sent
    SnapshotFailed,
    /// Registry dropped the subscriber
    ChannelClosed,
    /// Transport write failed
    SendFailed,
    /// Remote side went away
    Disconnected,
    Shutdown,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::SnapshotFailed => "snapshot_failed",
            Self::ChannelClosed => "channel_closed",
            Self::SendFailed => "send_failed",
            Self::Disconnected => "disconnected",
            Self::Shutdown => "shutdown",
        }
    }
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a finished connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOutcome {
    pub subscriber_id: Option<SubscriberId>,
    pub reason: CloseReason,
    /// Events written to the transport, snapshot excluded
    pub delivered: usize,
    /// Every state the connection passed through, in order
    pub transitions: Vec<ConnectionState>,
}
