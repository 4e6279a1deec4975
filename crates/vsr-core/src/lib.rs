//! Shared web plumbing for VS Recorder services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
