//! HTTP Routes
//!
//! API Endpoints:
//! - /ping              GET     健康检查
//! - /exercises         POST    创建训练记录（201）
//! - /exercises         GET     列出所有训练记录
//! - /exercises/:id     GET     获取训练记录（404 不存在）
//! - /exercises/:id     PUT     部分更新（400 载荷无效 / 404 不存在）
//! - /exercises/:id     DELETE  删除（204 / 404）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(exercise_routes())
}

/// Exercise 路由
fn exercise_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/exercises",
            get(handlers::list_exercises).post(handlers::create_exercise),
        )
        .route(
            "/exercises/:id",
            get(handlers::get_exercise)
                .put(handlers::update_exercise)
                .delete(handlers::delete_exercise),
        )
}
