//! Application State
//!
//! 存储适配器由外部构造后注入，handler 不持有全局连接

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateExerciseHandler, DeleteExerciseHandler, UpdateExerciseHandler,
    // Query handlers
    GetExerciseHandler, ListExercisesHandler,
    // Ports
    ExerciseRepositoryPort,
};

/// 应用状态
pub struct AppState {
    /// 存储后端名称（用于 /ping）
    pub storage_backend: &'static str,

    // ========== Command Handlers ==========
    pub create_exercise_handler: CreateExerciseHandler,
    pub update_exercise_handler: UpdateExerciseHandler,
    pub delete_exercise_handler: DeleteExerciseHandler,

    // ========== Query Handlers ==========
    pub get_exercise_handler: GetExerciseHandler,
    pub list_exercises_handler: ListExercisesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>, storage_backend: &'static str) -> Self {
        Self {
            storage_backend,

            create_exercise_handler: CreateExerciseHandler::new(exercise_repo.clone()),
            update_exercise_handler: UpdateExerciseHandler::new(exercise_repo.clone()),
            delete_exercise_handler: DeleteExerciseHandler::new(exercise_repo.clone()),

            get_exercise_handler: GetExerciseHandler::new(exercise_repo.clone()),
            list_exercises_handler: ListExercisesHandler::new(exercise_repo),
        }
    }
}
