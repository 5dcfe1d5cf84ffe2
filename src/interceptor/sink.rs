//! Destination of interceptor warnings.

/// Receives one warning per intercepted call.
///
/// The call mirrors a positional logging API: a format string with `{}`
/// placeholders and the two values that fill them.
#[cfg_attr(test, mockall::automock)]
pub trait WarnSink: Send + Sync {
    fn warn(&self, format: &str, arg1: &str, arg2: &str);
}

/// Sink that emits a `tracing` warning event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarnSink for TracingSink {
    fn warn(&self, format: &str, arg1: &str, arg2: &str) {
        tracing::warn!(
            target: "links::exception",
            call = arg1,
            args = arg2,
            "{}",
            render_format(format, &[arg1, arg2])
        );
    }
}

/// Fills `{}` placeholders left to right.
///
/// Surplus placeholders are kept verbatim, surplus values are dropped.
pub fn render_format(format: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(format.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut values = args.iter();
    let mut rest = format;

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format_fills_placeholders() {
        assert_eq!(
            render_format("{} called with args '{}'!", &["exception(m)", "[a, b]"]),
            "exception(m) called with args '[a, b]'!"
        );
    }

    #[test]
    fn test_render_format_keeps_unfilled_placeholders() {
        assert_eq!(render_format("{} and {}", &["one"]), "one and {}");
    }

    #[test]
    fn test_render_format_ignores_extra_values() {
        assert_eq!(render_format("only {}", &["one", "two"]), "only one");
    }

    #[test]
    fn test_render_format_without_placeholders() {
        assert_eq!(render_format("plain", &["one"]), "plain");
    }
}
