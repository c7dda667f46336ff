//! Product ID generation.
//!
//! IDs are creation timestamps in milliseconds. Two listings created in the
//! same millisecond (or with the clock stepping backwards) would collide, so
//! [`TimestampIds`] never hands out an ID at or below the last one issued.

use ecoswap_core::ProductId;

/// Source of fresh product IDs.
pub trait ProductIds {
    /// Issue the next ID. Every ID is strictly greater than the previous one.
    fn next_id(&mut self) -> ProductId;

    /// Record an ID that already exists (e.g. from a loaded catalog) so that
    /// later IDs are issued above it.
    fn observe(&mut self, id: ProductId);
}

/// Wall-clock milliseconds, bumped past the last ID when the clock has not
/// advanced.
#[derive(Debug, Clone)]
pub struct TimestampIds {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl TimestampIds {
    /// IDs from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// IDs from a custom millisecond clock.
    #[must_use]
    pub const fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductIds for TimestampIds {
    fn next_id(&mut self) -> ProductId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => {
                tracing::debug!(now, last, "Clock has not advanced, bumping product id");
                last.saturating_add(1)
            }
            _ => now,
        };
        self.last = Some(id);
        ProductId::new(id)
    }

    fn observe(&mut self, id: ProductId) {
        let id = id.as_i64();
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
    }
}

/// Counter starting at 1. Deterministic, for tests and fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductIds for SequentialIds {
    fn next_id(&mut self) -> ProductId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        ProductId::new(id)
    }

    fn observe(&mut self, id: ProductId) {
        self.next = self.next.max(id.as_i64().saturating_add(1));
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
