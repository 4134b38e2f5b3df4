use chrono::{DateTime, Utc};

/// A record-store event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - produced by `Aggregate::handle` and consumed by `Aggregate::apply`
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (wall-clock time of the user action).
    fn occurred_at(&self) -> DateTime<Utc>;
}
