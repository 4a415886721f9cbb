//! Exercise HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{
    CreateExercise, DeleteExercise, GetExercise, ListExercises, UpdateExercise,
};
use crate::infrastructure::http::dto::ExerciseResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 请求体必须是 JSON 对象，否则与校验失败同样处理
fn json_object(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match payload {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(other)) => Err(ApiError::BadRequest(format!(
            "Expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 创建训练记录
pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ExerciseResponse>), ApiError> {
    let command = CreateExercise {
        payload: json_object(payload)?,
    };

    let exercise = state.create_exercise_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(exercise))))
}

/// 获取所有训练记录
pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ExerciseResponse>>, ApiError> {
    let exercises = state.list_exercises_handler.handle(ListExercises).await?;

    Ok(Json(
        exercises.into_iter().map(ExerciseResponse::from).collect(),
    ))
}

/// 获取单条训练记录
pub async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise = state.get_exercise_handler.handle(GetExercise { id }).await?;

    Ok(Json(ExerciseResponse::from(exercise)))
}

/// 部分更新训练记录
pub async fn update_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let command = UpdateExercise {
        id,
        payload: json_object(payload)?,
    };

    let exercise = state.update_exercise_handler.handle(command).await?;

    Ok(Json(ExerciseResponse::from(exercise)))
}

/// 删除训练记录
pub async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_exercise_handler
        .handle(DeleteExercise { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
