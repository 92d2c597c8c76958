//! Participation statistics for the exchange programme website: per-year
//! percentages, shared year colors, country rosters and the count-up
//! counters shown next to the headline figures.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
