//! Warning-level logging around error handlers.

use crate::interceptor::join_point::{JoinPoint, LoggedArg};
use crate::interceptor::sink::{TracingSink, WarnSink};

/// Format of the warning emitted for every intercepted call.
pub const WARN_FORMAT: &str = "{} called with args '{}'!";

/// Logs intercepted error-handler calls, then lets them run.
///
/// The sink receives exactly one warning per call:
///
/// - first value: the call-site description with `execution` replaced by `exception`
/// - second value: the detail message of the sole argument when it is a structured
///   application error, otherwise the rendering of the whole argument list
///
/// Logging never changes the outcome. Whatever the intercepted call returns,
/// `Ok` or `Err`, is handed back as is.
#[derive(Debug, Clone, Default)]
pub struct ExceptionLogger<S: WarnSink = TracingSink> {
    sink: S,
}

impl<S: WarnSink> ExceptionLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn log_exception_handle_methods<J: JoinPoint>(&self, join_point: J) -> J::Output {
        let args = match join_point.args() {
            [single] => single
                .detail_message()
                .unwrap_or_else(|| deep_to_string(&[*single])),
            all => deep_to_string(all),
        };
        let call = join_point
            .to_short_string()
            .replace("execution", "exception");

        self.sink.warn(WARN_FORMAT, &call, &args);

        join_point.proceed()
    }
}

impl ExceptionLogger<TracingSink> {
    /// Logger writing to `tracing`.
    pub const fn tracing() -> Self {
        Self { sink: TracingSink }
    }
}

/// Renders an argument list as `[first, second, ...]`.
pub fn deep_to_string(args: &[&dyn LoggedArg]) -> String {
    let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
