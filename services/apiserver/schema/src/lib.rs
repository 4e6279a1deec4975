//! sea-orm entities for the API server's tables.

pub mod battles;
pub mod decks;
pub mod games;
pub mod official_events;
pub mod records;
