use crate::Metrics;

use tl_core::PostEvent;

use log::{debug, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// What happened to a published event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Waiting in the intake queue for fan-out
    Queued,
    /// Dropped: the intake queue was full or the fan-out worker is gone
    Skipped,
}

impl PublishOutcome {
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued)
    }
}

/// Producer-facing end of the intake queue.
///
/// Cheap to clone; every producer call site can hold its own copy.
#[derive(Clone)]
pub struct Broadcaster {
    intake: mpsc::Sender<PostEvent>,
    metrics: Metrics,
}

impl Broadcaster {
    pub(crate) fn new(intake: mpsc::Sender<PostEvent>, metrics: Metrics) -> Self {
        Self { intake, metrics }
    }

    /// Hand an event to the fan-out worker without waiting.
    ///
    /// Delivery is best-effort: when the intake queue is full the event is
    /// dropped for every subscriber and the caller is not told about it
    /// beyond the returned outcome.
    pub fn publish(&self, event: PostEvent) -> PublishOutcome {
        let post_id = event.post_id();

        match self.intake.try_send(event) {
            Ok(()) => {
                debug!("Queued post {post_id} for broadcast");
                self.metrics.event_published();
                PublishOutcome::Queued
            }
            Err(TrySendError::Full(_)) => {
                warn!("Broadcast queue is full, post {post_id} not broadcast");
                self.metrics.event_skipped();
                PublishOutcome::Skipped
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Broadcast worker stopped, post {post_id} not broadcast");
                self.metrics.event_skipped();
                PublishOutcome::Skipped
            }
        }
    }
}
