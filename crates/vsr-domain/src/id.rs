//! Identifier generation for mutable entities.

use std::sync::Arc;

use ulid::Ulid;

/// Produces fresh, creation-time-sortable entity identifiers.
///
/// Passed into use cases rather than held globally so tests can supply
/// deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator: a new ULID per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn generate(&self) -> String {
        Ulid::new().to_string()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Arc<T> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn generate(&self) -> String {
        (**self).generate()
    }
}
