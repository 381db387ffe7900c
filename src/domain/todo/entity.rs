//! Todo Context - Entity

use chrono::{DateTime, Utc};

use super::{TodoError, TodoId};

/// 标题最大长度（字符数）
pub const MAX_TITLE_CHARS: usize = 200;

/// Todo 实体
///
/// 不变量:
/// - id 由存储层分配，分配后不可变
/// - 不存在两个 id 相同的存活记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub deadline: Option<DateTime<Utc>>,
}

/// 新建 Todo 草稿（尚未持久化，没有 id）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub deadline: Option<DateTime<Utc>>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn validate(&self) -> Result<(), TodoError> {
        validate_title(&self.title)
    }
}

impl Todo {
    /// 用存储层分配的 id 固化草稿
    pub fn from_draft(id: TodoId, draft: NewTodo) -> Self {
        Self {
            id,
            title: draft.title,
            completed: draft.completed,
            deadline: draft.deadline,
        }
    }

    pub fn validate(&self) -> Result<(), TodoError> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(TodoError::TitleTooLong {
            max: MAX_TITLE_CHARS,
            actual: chars,
        });
    }
    Ok(())
}
