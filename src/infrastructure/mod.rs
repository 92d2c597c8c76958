// Infrastructure layer - Configuration and data sources
pub mod builtin;
pub mod config;
pub mod config_repository;
