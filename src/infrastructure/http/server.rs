//! HTTP Server
//!
//! 组装 Router 并按 `config::ServerConfig` 监听

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 构建带全部中间件的 Router（集成测试直接使用）
pub fn build_router(state: AppState) -> Router {
    // 前端开发时与 API 不同源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    create_routes()
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// 监听 `config.addr()`，收到 `shutdown` 后优雅关闭
pub async fn serve<F>(config: &ServerConfig, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryExerciseRepository;
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    fn state() -> AppState {
        AppState::new(InMemoryExerciseRepository::new().arc(), "memory")
    }

    #[tokio::test]
    async fn test_router_allows_cross_origin_requests() {
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = build_router(state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_serve_binds_configured_address_and_shuts_down() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        // 关闭信号立即就绪
        assert!(serve(&config, state(), async {}).await.is_ok());
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        assert!(serve(&config, state(), async {}).await.is_err());
    }
}
