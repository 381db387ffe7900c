//! Todo Service - 待办事项 Web 服务

use std::sync::Arc;

use todo_service::config::{load_config, print_config, AppConfig};
use todo_service::infrastructure::http::{AppState, HttpServer, ServerConfig};
use todo_service::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTodoRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},todo_service={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Todo Service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.path, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let todo_repo = Arc::new(SqliteTodoRepository::new(pool));
    let state = AppState::new(todo_repo, &config.pagination);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_allowed_origins(config.cors.allowed_origins.clone());
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
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
