//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod repository;
mod todo_repo;

pub use database::*;
pub use repository::*;
pub use todo_repo::*;

/// 测试用：内存库 + 已迁移的 Todo Repository
#[cfg(test)]
pub(crate) async fn test_repository() -> std::sync::Arc<SqliteTodoRepository> {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    std::sync::Arc::new(SqliteTodoRepository::new(pool))
}
