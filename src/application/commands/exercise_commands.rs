//! Exercise Commands

use serde_json::{Map, Value};

/// 创建训练记录命令
///
/// payload 为原始 JSON 对象，由 handler 校验
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub payload: Map<String, Value>,
}

/// 部分更新训练记录命令
#[derive(Debug, Clone)]
pub struct UpdateExercise {
    pub id: String,
    pub payload: Map<String, Value>,
}

/// 删除训练记录命令
#[derive(Debug, Clone)]
pub struct DeleteExercise {
    pub id: String,
}
