//! Core domain entities.
//!
//! - [`Link`] - A stored URL and its opaque identifier

pub mod link;

pub use link::Link;
