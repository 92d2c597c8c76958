// Domain layer - Pure models and rules, no I/O
pub mod aggregation;
pub mod error;
pub mod palette;
pub mod reveal;
pub mod series;
pub mod statistics;
