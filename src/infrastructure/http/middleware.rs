//! HTTP Middleware
//!
//! 按状态码记录失败请求

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 错误状态码日志中间件
///
/// 4xx 记为 warn，5xx 记为 error，附带耗时
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request rejected"
        );
    }

    response
}
