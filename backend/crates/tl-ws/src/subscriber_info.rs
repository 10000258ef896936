use crate::SubscriberId;

use chrono::{DateTime, Utc};

/// Information about an active subscriber
#[derive(Debug, Clone)]
pub struct SubscriberInfo {
    pub subscriber_id: SubscriberId,
    /// Identity the session layer vouched for
    pub identity: String,
    pub registered_at: DateTime<Utc>,
}
