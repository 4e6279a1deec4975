//! Auth types shared across VS Recorder services.
//!
//! Provides JWT validation and the `RequiredUid` / `OptionalUid` extractors.

pub mod filter;
pub mod token;
