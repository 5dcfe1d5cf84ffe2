//! Intercepted calls and their arguments.

use std::fmt;

/// An argument of an intercepted call.
///
/// Everything is logged through its `Display` rendering unless it is a
/// recognized application error, in which case [`LoggedArg::detail_message`]
/// returns the structured summary that is logged instead.
pub trait LoggedArg: fmt::Display {
    /// Human-readable summary carried by structured application errors.
    fn detail_message(&self) -> Option<String> {
        None
    }
}

impl LoggedArg for String {}

impl LoggedArg for &str {}

/// A call captured by the interceptor.
///
/// Mirrors an around-advice join point: the arguments and a short call-site
/// description can be inspected before the call is carried out with
/// [`JoinPoint::proceed`].
pub trait JoinPoint {
    /// Result of the intercepted call, returned to the caller unmodified.
    type Output;

    /// Arguments the call was made with.
    fn args(&self) -> &[&dyn LoggedArg];

    /// Short description of the call site, e.g. `execution(Handler.handle(..))`.
    fn to_short_string(&self) -> String;

    /// Runs the intercepted call.
    fn proceed(self) -> Self::Output;
}

/// Join point over a closure.
///
/// The signature is rendered as `execution(<signature>)` and the closure is
/// the method body that runs on [`JoinPoint::proceed`].
pub struct MethodCall<'a, R> {
    signature: &'a str,
    args: Vec<&'a dyn LoggedArg>,
    body: Box<dyn FnOnce() -> R + 'a>,
}

impl<'a, R> MethodCall<'a, R> {
    pub fn new(
        signature: &'a str,
        args: Vec<&'a dyn LoggedArg>,
        body: impl FnOnce() -> R + 'a,
    ) -> Self {
        Self {
            signature,
            args,
            body: Box::new(body),
        }
    }
}

impl<R> JoinPoint for MethodCall<'_, R> {
    type Output = R;

    fn args(&self) -> &[&dyn LoggedArg] {
        &self.args
    }

    fn to_short_string(&self) -> String {
        format!("execution({})", self.signature)
    }

    fn proceed(self) -> R {
        (self.body)()
    }
}
