//! Exercise Queries

/// 获取单条训练记录
#[derive(Debug, Clone)]
pub struct GetExercise {
    pub id: String,
}

/// 列出所有训练记录
#[derive(Debug, Clone)]
pub struct ListExercises;
