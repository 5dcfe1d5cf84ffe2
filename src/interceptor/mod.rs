//! Around-advice for error handlers.
//!
//! Every error handler in the crate runs through [`ExceptionLogger`], which
//! emits one warning line describing the handled call and then lets the
//! handler run untouched.
//!
//! # Building blocks
//!
//! - [`JoinPoint`] - an intercepted call that can be inspected and then proceeded
//! - [`MethodCall`] - the concrete join point used by the HTTP error handlers
//! - [`LoggedArg`] - argument rendering, with an optional structured detail message
//! - [`WarnSink`] - where the warning line goes ([`TracingSink`] in production)
//!
//! # Example
//!
//! ```rust,ignore
//! let logger = ExceptionLogger::tracing();
//! let response = logger.log_exception_handle_methods(MethodCall::new(
//!     "ApiExceptionHandler.handle_app_error(..)",
//!     vec![&error],
//!     || handle_app_error(&error),
//! ));
//! ```

pub mod exception_logger;
pub mod join_point;
pub mod sink;

pub use exception_logger::{ExceptionLogger, WARN_FORMAT, deep_to_string};
pub use join_point::{JoinPoint, LoggedArg, MethodCall};
pub use sink::{TracingSink, WarnSink, render_format};

#[cfg(test)]
pub use sink::MockWarnSink;
