//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Display;
use thiserror::Error;

use crate::domain::{NewTodo, Todo, TodoId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// 可持久化实体
///
/// `Id` 是存储层分配的整数标识；`Draft` 是尚未分配 id 的创建载荷
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Display + From<i64> + Into<i64> + Send + Sync + 'static;
    type Draft: Send + Sync + 'static;

    /// 实体名称（日志和错误信息用）
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}

impl Entity for Todo {
    type Id = TodoId;
    type Draft = NewTodo;

    const NAME: &'static str = "Todo";

    fn id(&self) -> TodoId {
        self.id
    }

    fn from_draft(id: TodoId, draft: NewTodo) -> Self {
        Todo::from_draft(id, draft)
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// 分页参数错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("pageNumber must be at least 1, got {0}")]
    InvalidPageNumber(i64),

    #[error("pageNumber must be at most {max}, got {number}")]
    PageNumberTooLarge { number: i64, max: u32 },

    #[error("pageSize must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: i64, max: u32 },
}

/// 分页请求（页码从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// 校验并创建分页请求
    ///
    /// 页码 < 1、页大小 < 1 或超过 `max_page_size` 均被拒绝
    pub fn new(page_number: i64, page_size: i64, max_page_size: u32) -> Result<Self, PageError> {
        if page_number < 1 {
            return Err(PageError::InvalidPageNumber(page_number));
        }
        let page_number =
            u32::try_from(page_number).map_err(|_| PageError::PageNumberTooLarge {
                number: page_number,
                max: u32::MAX,
            })?;

        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|s| (1..=max_page_size).contains(s))
            .ok_or(PageError::InvalidPageSize {
                size: page_size,
                max: max_page_size,
            })?;

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 跳过的记录数：(page_number - 1) * page_size
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

// ============================================================================
// Generic Repository
// ============================================================================

/// 通用 Repository Port
///
/// 每个写操作在返回前提交，不做批量事务
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// 按存储自然顺序分页获取
    async fn list(&self, page: PageRequest) -> Result<Vec<E>, RepositoryError>;

    /// 统计记录总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, RepositoryError>;

    /// 新增实体，返回带存储分配 id 的实体
    async fn add(&self, draft: E::Draft) -> Result<E, RepositoryError>;

    /// 按 id 整体替换；id 不存在时返回 NotFound
    async fn update(&self, entity: &E) -> Result<E, RepositoryError>;

    /// 按 id 删除；id 不存在时返回 NotFound
    async fn delete(&self, id: E::Id) -> Result<(), RepositoryError>;
}

// ============================================================================
// Todo Repository
// ============================================================================

/// Todo Repository Port
///
/// 在通用仓储之上只添加 Todo 特有的操作
#[async_trait]
pub trait TodoRepositoryPort: Repository<Todo> {
    /// 只更新截止时间；id 不存在时返回 NotFound
    async fn update_deadline(
        &self,
        id: TodoId,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError>;
}
