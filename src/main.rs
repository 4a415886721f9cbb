//! Exercises - 训练记录 REST 服务

use std::sync::Arc;

use exercises::application::ExerciseRepositoryPort;
use exercises::config::{load_config, print_config, StorageBackend};
use exercises::infrastructure::http::{serve, AppState};
use exercises::infrastructure::memory::InMemoryExerciseRepository;
use exercises::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteExerciseRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},exercises={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Exercises - 训练记录服务");
    print_config(&config);

    // 存储连接只在启动时建立一次，失败则终止启动
    let exercise_repo: Arc<dyn ExerciseRepositoryPort> = match config.database.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = config
                .database
                .sqlite_file_path()
                .and_then(|path| std::path::Path::new(path).parent())
                .filter(|parent| !parent.as_os_str().is_empty())
            {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig::from(&config.database);
            let pool = create_pool(&db_config).await.map_err(|e| {
                tracing::error!(error = %e, "Could not connect to database");
                anyhow::anyhow!("Could not connect to database: {}", e)
            })?;
            run_migrations(&pool).await?;

            Arc::new(SqliteExerciseRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on shutdown");
            InMemoryExerciseRepository::new().arc()
        }
    };

    let state = AppState::new(exercise_repo, config.database.backend.as_str());

    tracing::info!("Starting HTTP server...");

    serve(&config.server, state, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received shutdown signal");
    })
    .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
