//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage on PostgreSQL via SQLx
//! - [`InMemoryLinkRepository`] - Process-local link storage for tests and local runs

pub mod in_memory_link_repository;
pub mod pg_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
