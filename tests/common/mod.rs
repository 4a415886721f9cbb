//! HTTP 集成测试公共工具
//!
//! tests/ 下每个文件是独立的 crate，只被部分文件使用的工具会触发 dead_code 警告

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use exercises::application::{ExerciseRepositoryPort, RepositoryError};
use exercises::domain::{Exercise, ExerciseId, ExercisePatch, NewExercise};
use exercises::infrastructure::http::{build_router, AppState};
use exercises::infrastructure::memory::InMemoryExerciseRepository;
use exercises::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteExerciseRepository,
};

/// 每个场景都要跑一遍的存储后端
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Memory,
    Sqlite,
}

pub const BACKENDS: [Backend; 2] = [Backend::Memory, Backend::Sqlite];

pub async fn repository(backend: Backend) -> Arc<dyn ExerciseRepositoryPort> {
    match backend {
        Backend::Memory => Arc::new(InMemoryExerciseRepository::new()),
        Backend::Sqlite => {
            let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
            run_migrations(&pool).await.unwrap();
            Arc::new(SqliteExerciseRepository::new(pool))
        }
    }
}

pub fn app_with(repo: Arc<dyn ExerciseRepositoryPort>) -> Router {
    build_router(AppState::new(repo, "test"))
}

pub async fn app(backend: Backend) -> Router {
    app_with(repository(backend).await)
}

/// 响应状态码和解析后的 JSON（空 body 为 `Value::Null`）
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse { status, body }
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    send(app, method, uri, Some(&body.to_string())).await
}

pub fn pushups() -> Value {
    serde_json::json!({
        "name": "Pushups",
        "reps": 20,
        "weight": 45,
        "unit": "lbs",
        "date": "11-20-25"
    })
}

/// 每次调用都失败的仓储，用于覆盖 500 分支
pub struct FailingRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::DatabaseError("connection reset".to_string())
}

#[async_trait]
impl ExerciseRepositoryPort for FailingRepository {
    async fn create(&self, _exercise: NewExercise) -> Result<Exercise, RepositoryError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Exercise>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &ExerciseId) -> Result<Option<Exercise>, RepositoryError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: &ExerciseId,
        _patch: ExercisePatch,
    ) -> Result<Option<Exercise>, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &ExerciseId) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }
}
