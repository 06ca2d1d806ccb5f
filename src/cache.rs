use std::time::{Duration, Instant};

/// Single-slot cache with an explicit TTL. Callers pass the current instant
/// so tests can drive expiry without sleeping.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> TtlCache<T> {
        TtlCache { ttl, slot: None }
    }

    pub fn get(&self, now: Instant) -> Option<&T> {
        self.slot
            .as_ref()
            .filter(|(stored_at, _)| now.duration_since(*stored_at) < self.ttl)
            .map(|(_, value)| value)
    }

    pub fn put(&mut self, value: T, now: Instant) {
        self.slot = Some((now, value));
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
