//! SQLite Generic Repository
//!
//! 对任意实现了 [`SqliteEntity`] 的实体提供通用的分页、计数、增删改查

use async_trait::async_trait;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};
use std::marker::PhantomData;

use super::DbPool;
use crate::application::ports::{Entity, PageRequest, Repository, RepositoryError};

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}

/// 带参数绑定的 SQLite 查询
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// 实体与单表之间的映射
///
/// 主键列固定为 `id INTEGER PRIMARY KEY`
pub trait SqliteEntity: Entity {
    /// 查询结果行
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    /// 表名
    const TABLE: &'static str;

    /// 除 id 外的列，顺序必须与 `bind_draft` / `bind_fields` 的绑定顺序一致
    const COLUMNS: &'static [&'static str];

    fn from_row(row: Self::Row) -> Result<Self, RepositoryError>;

    fn bind_draft<'q>(draft: &Self::Draft, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// SQLite 通用 Repository
///
/// 每个写操作单独执行并立即提交
pub struct SqliteRepository<E> {
    pool: DbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: SqliteEntity> SqliteRepository<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
    }
}

#[async_trait]
impl<E: SqliteEntity> Repository<E> for SqliteRepository<E> {
    async fn list(&self, page: PageRequest) -> Result<Vec<E>, RepositoryError> {
        let sql = format!("{} ORDER BY id LIMIT ? OFFSET ?", Self::select_sql());

        let rows: Vec<E::Row> = sqlx::query_as::<Sqlite, E::Row>(&sql)
            .bind(i64::from(page.limit()))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(E::from_row).collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);

        let count: i64 = sqlx::query_scalar::<Sqlite, i64>(&sql)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, RepositoryError> {
        let sql = format!("{} WHERE id = ?", Self::select_sql());

        let raw_id: i64 = id.into();
        let row: Option<E::Row> = sqlx::query_as::<Sqlite, E::Row>(&sql)
            .bind(raw_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(E::from_row).transpose()
    }

    async fn add(&self, draft: E::Draft) -> Result<E, RepositoryError> {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );

        let result = E::bind_draft(&draft, sqlx::query(&sql))
            .execute(&self.pool)
            .await?;

        Ok(E::from_draft(E::Id::from(result.last_insert_rowid()), draft))
    }

    async fn update(&self, entity: &E) -> Result<E, RepositoryError> {
        let assignments: Vec<String> = E::COLUMNS.iter().map(|c| format!("{} = ?", c)).collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            E::TABLE,
            assignments.join(", ")
        );

        let id = entity.id();
        let raw_id: i64 = id.into();
        let result = entity
            .bind_fields(sqlx::query(&sql))
            .bind(raw_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(E::NAME, id));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: E::Id) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);

        let raw_id: i64 = id.into();
        let result = sqlx::query(&sql)
            .bind(raw_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(E::NAME, id));
        }

        Ok(())
    }
}
