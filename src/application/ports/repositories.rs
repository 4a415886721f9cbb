//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Exercise, ExerciseId, ExercisePatch, NewExercise};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Exercise Repository Port
///
/// 每个方法只访问一次存储，不做重试
#[async_trait]
pub trait ExerciseRepositoryPort: Send + Sync {
    /// 插入新记录，由存储层分配 ID
    async fn create(&self, exercise: NewExercise) -> Result<Exercise, RepositoryError>;

    /// 获取所有记录（顺序不保证，当前实现为插入顺序）
    async fn find_all(&self) -> Result<Vec<Exercise>, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, RepositoryError>;

    /// 只写入 patch 中出现的字段，返回更新后的完整记录
    async fn update(
        &self,
        id: &ExerciseId,
        patch: ExercisePatch,
    ) -> Result<Option<Exercise>, RepositoryError>;

    /// 删除记录，确实删除了一条时返回 true
    async fn delete(&self, id: &ExerciseId) -> Result<bool, RepositoryError>;
}
