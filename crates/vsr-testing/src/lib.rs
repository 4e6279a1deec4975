//! Test utilities for VS Recorder services.
//!
//! Provides bearer-token headers, deterministic id generation, an in-memory
//! SQLite database and a oneshot request driver for routers.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod app;
pub mod auth;
pub mod db;
pub mod ids;
