//! Exception logging around error handlers, observed through a recording sink.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use links::error::{ApiError, AppError};
use links::interceptor::{ExceptionLogger, LoggedArg, MethodCall, WARN_FORMAT, WarnSink};
use links::slackbot::BotError;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogLine {
    format: String,
    arg1: String,
    arg2: String,
}

#[derive(Clone, Default)]
struct RecordingSink {
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl RecordingSink {
    fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }
}

impl WarnSink for RecordingSink {
    fn warn(&self, format: &str, arg1: &str, arg2: &str) {
        self.lines.lock().unwrap().push(LogLine {
            format: format.to_string(),
            arg1: arg1.to_string(),
            arg2: arg2.to_string(),
        });
    }
}

#[test]
fn test_app_error_handler_is_logged_once_with_detail_message() {
    let sink = RecordingSink::default();
    let logger = ExceptionLogger::new(sink.clone());
    let error = AppError::not_found("Link not found", "No link with id 'abc'");

    let response = logger.log_exception_handle_methods(MethodCall::new(
        "ApiExceptionHandler.handle_app_error(..)",
        vec![&error as &dyn LoggedArg],
        || error.status_code(),
    ));

    assert_eq!(response, StatusCode::NOT_FOUND);
    assert_eq!(
        sink.lines(),
        vec![LogLine {
            format: WARN_FORMAT.to_string(),
            arg1: "exception(ApiExceptionHandler.handle_app_error(..))".to_string(),
            arg2: "Link not found (LKS-F1-D2): No link with id 'abc'".to_string(),
        }]
    );
}

#[test]
fn test_bot_exchange_error_is_logged_with_api_detail() {
    let sink = RecordingSink::default();
    let logger = ExceptionLogger::new(sink.clone());
    let error = BotError::links_exchange(
        ApiError::new(
            400,
            "LKS-F1-D1",
            "Some error",
            "Links server not found",
            "Something went wrong",
            vec![],
        ),
        "400 Bad Request",
    );

    let outcome: Result<(), String> = logger.log_exception_handle_methods(MethodCall::new(
        "BotExceptionHandler.handle_bot_error(..)",
        vec![&error as &dyn LoggedArg],
        || Err(error.to_string()),
    ));

    assert_eq!(outcome, Err("Some error".to_string()));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].arg2, "Some error (LKS-F1-D1): Something went wrong");
}

#[test]
fn test_plain_arguments_are_rendered_as_list() {
    let sink = RecordingSink::default();
    let logger = ExceptionLogger::new(sink.clone());
    let first = "first".to_string();

    let value = logger.log_exception_handle_methods(MethodCall::new(
        "Handler.handle(..)",
        vec![&first as &dyn LoggedArg, &"second"],
        || 42,
    ));

    assert_eq!(value, 42);
    assert_eq!(sink.lines()[0].arg1, "exception(Handler.handle(..))");
    assert_eq!(sink.lines()[0].arg2, "[first, second]");
}

#[test]
fn test_bot_error_response_keeps_slack_status() {
    let response = BotError::WrongToken.into_response();

    assert_eq!(response.status(), StatusCode::OK);
}
