// Application layer - Use cases over the domain
pub mod reveal_service;
pub mod statistics_repository;
pub mod statistics_service;
