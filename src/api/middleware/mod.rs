//! HTTP middleware for request processing.
//!
//! Provides observability middleware shared by the links service and the bot.

pub mod tracing;
