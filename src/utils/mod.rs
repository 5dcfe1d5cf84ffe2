//! Utility functions shared across the service.
//!
//! - [`id_generator`] - Link identifier generation
//! - [`url_validator`] - Submitted URL checks

pub mod id_generator;
pub mod url_validator;
