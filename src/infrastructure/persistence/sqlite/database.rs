//! SQLite Database - 数据库连接和迁移

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;
use std::time::Duration;

use crate::config::DatabaseConfig as StorageConfig;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接串
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/exercises.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库，只能有一个连接，否则每个连接各自一份数据
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

impl From<&StorageConfig> for DatabaseConfig {
    fn from(config: &StorageConfig) -> Self {
        Self {
            database_url: config.url.clone(),
            max_connections: config.max_connections,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 启动时调用一次；连接失败直接返回错误，由调用方终止启动
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.database_url.contains(":memory:") {
        // 连接被回收后内存数据库会丢失
        options = options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }
    let pool = options.connect(&config.database_url).await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 设置 busy_timeout=5000ms，遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!("SQLite pool created with WAL mode and busy_timeout=5000ms");

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // seq 只用于保持插入顺序，对外的标识是 id
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exercises (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL CHECK (length(name) > 0),
            reps INTEGER NOT NULL CHECK (reps > 0),
            weight INTEGER NOT NULL CHECK (weight > 0),
            unit TEXT NOT NULL CHECK (unit IN ('kgs', 'lbs')),
            date TEXT NOT NULL CHECK (date GLOB '[0-9][0-9]-[0-9][0-9]-[0-9][0-9]')
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    async fn insert(pool: &DbPool, reps: i64, date: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO exercises (id, name, reps, weight, unit, date) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind("Pushups")
        .bind(reps)
        .bind(45_i64)
        .bind("lbs")
        .bind(date)
        .execute(pool)
        .await
        .map(|_| ())
    }

    #[tokio::test]
    async fn test_schema_rejects_invalid_rows() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert!(insert(&pool, 20, "11-20-25").await.is_ok());
        assert!(insert(&pool, 0, "11-20-25").await.is_err());
        // 日期只检查形状
        assert!(insert(&pool, 20, "99-99-99").await.is_ok());
        assert!(insert(&pool, 20, "nope").await.is_err());
        assert!(insert(&pool, 20, "2025-11-20").await.is_err());
        assert!(insert(&pool, 20, "11-20-2025").await.is_err());
    }

    #[test]
    fn test_from_storage_config() {
        let storage = StorageConfig {
            url: "sqlite:/tmp/exercises.db?mode=rwc".to_string(),
            max_connections: 3,
            ..Default::default()
        };

        let config = DatabaseConfig::from(&storage);
        assert_eq!(config.database_url, "sqlite:/tmp/exercises.db?mode=rwc");
        assert_eq!(config.max_connections, 3);
    }

    #[tokio::test]
    async fn test_file_db_survives_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("exercises.db"));

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO exercises (id, name, reps, weight, unit, date) VALUES ('a', 'Row', 8, 60, 'kgs', '03-04-25')",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool.close().await;

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exercises")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_connect_failure_is_reported() {
        let config = DatabaseConfig {
            database_url: "sqlite:/nonexistent-dir/sub/exercises.db?mode=ro".to_string(),
            max_connections: 1,
        };
        assert!(create_pool(&config).await.is_err());
    }
}
