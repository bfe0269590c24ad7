//! HTTP Middleware
//!
//! - 状态码错误日志
//! - 405 响应统一为 JSON 错误格式

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::ApiError;

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，4xx 记 warn，5xx 记 error；每个请求至多一条
/// 注意：参数错误的具体原因在 ApiError::into_response() 中以 debug 级别记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 将路由层产生的 405（无响应体）改写为 JSON 错误，保留 `Allow` 头
pub async fn method_not_allowed_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;
    use tracing::subscriber::DefaultGuard;

    /// 收集当前线程的日志输出
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn install() -> (Self, DefaultGuard) {
            let logs = Self::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(tracing::Level::TRACE)
                .with_ansi(false)
                .finish();
            let guard = tracing::subscriber::set_default(subscriber);
            (logs, guard)
        }

        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn count(&self, level: &str, message: &str) -> usize {
            self.lines()
                .iter()
                .filter(|line| line.contains(level) && line.contains(message))
                .count()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    async fn missing_parameter_handler() -> ApiError {
        ApiError::MissingParameter("Parameter 'n' is required".to_string())
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .route("/missing", get(missing_parameter_handler))
            .layer(axum::middleware::from_fn(method_not_allowed_middleware))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn get_status(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_ok_response_no_log() {
        let (logs, _guard) = CapturedLogs::install();

        assert_eq!(get_status("/ok").await, StatusCode::OK);
        assert_eq!(logs.count("", "HTTP"), 0, "{:?}", logs.lines());
    }

    #[tokio::test]
    async fn test_client_error_logs_warning() {
        let (logs, _guard) = CapturedLogs::install();

        assert_eq!(get_status("/not-found").await, StatusCode::NOT_FOUND);
        assert_eq!(logs.count("WARN", "HTTP client error"), 1, "{:?}", logs.lines());
        assert_eq!(logs.count("ERROR", "HTTP"), 0);
    }

    #[tokio::test]
    async fn test_server_error_logs_error() {
        let (logs, _guard) = CapturedLogs::install();

        assert_eq!(get_status("/error").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(logs.count("ERROR", "HTTP server error"), 1, "{:?}", logs.lines());
        assert_eq!(logs.count("WARN", "HTTP"), 0);
    }

    #[tokio::test]
    async fn test_bad_request_warned_once() {
        let (logs, _guard) = CapturedLogs::install();

        assert_eq!(get_status("/missing").await, StatusCode::BAD_REQUEST);
        let warnings = logs.lines().iter().filter(|l| l.contains("WARN")).count();
        assert_eq!(warnings, 1, "{:?}", logs.lines());
        assert_eq!(logs.count("DEBUG", "Bad request"), 1);
    }

    #[tokio::test]
    async fn test_method_not_allowed_rewritten_as_json() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .method("DELETE")
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method not allowed");
        assert_eq!(body["status"], 405);
    }
}
