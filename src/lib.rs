//! Exercises - 训练记录 REST 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Exercise Context: 训练记录聚合、值对象、载荷校验
//!
//! 应用层 (application/):
//! - Ports: ExerciseRepositoryPort
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 单条 / 列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储
//! - Memory: 内存存储（测试替身）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
