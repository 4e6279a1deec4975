//! Deterministic id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use vsr_domain::id::IdGenerator;

/// Yields `00000000000000000000000001`, `…0002`, and so on: 26 characters,
/// lexicographically ordered by creation like a ULID.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the n-th call (1-based) returns.
    pub fn nth(n: u64) -> String {
        format!("{n:026}")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Self::nth(n)
    }
}
