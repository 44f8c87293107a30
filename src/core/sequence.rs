use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source for records minted by creation endpoints.
///
/// Lives as long as the service that owns it; there is no reset short of
/// building a new one. Increments are atomic so concurrent workers never
/// observe the same value.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Sequence whose first `next()` returns `last + 1`
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Advance and return the new identifier
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last identifier handed out (0 before the first call)
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}
