//! Domain types shared across VS Recorder crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers and in handlers that parse query strings.

pub mod date;
pub mod id;
pub mod pagination;
