use metrics::{counter, gauge};

/// Metrics collector for the timeline broadcaster
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "tl_ws" }
    }

    /// Record an event accepted onto the intake queue
    pub fn event_published(&self) {
        counter!(format!("{}.events.published", self.prefix)).increment(1);
    }

    /// Record an event dropped because the intake queue was full
    pub fn event_skipped(&self) {
        counter!(format!("{}.events.skipped", self.prefix)).increment(1);
    }

    /// Record one completed fan-out
    pub fn fan_out(&self, enqueued: usize, dropped: usize) {
        counter!(format!("{}.fanout.total", self.prefix)).increment(1);
        counter!(format!("{}.fanout.enqueued", self.prefix)).increment(enqueued as u64);
        counter!(format!("{}.subscribers.dropped_slow", self.prefix)).increment(dropped as u64);
    }

    /// Record event written to a subscriber's transport
    pub fn event_delivered(&self) {
        counter!(format!("{}.events.delivered", self.prefix)).increment(1);
    }

    pub fn render_failed(&self) {
        counter!(format!("{}.errors.render", self.prefix)).increment(1);
    }

    pub fn subscriber_count(&self, count: usize) {
        gauge!(format!("{}.subscribers.active", self.prefix)).set(count as f64);
    }

    /// Record a removal request that could not be queued
    pub fn removal_request_dropped(&self) {
        counter!(format!("{}.cleanup.dropped", self.prefix)).increment(1);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
