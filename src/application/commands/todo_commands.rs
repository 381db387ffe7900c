//! Todo Commands

use chrono::{DateTime, Utc};

use crate::domain::{Todo, TodoId};

/// 创建 Todo 命令
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub title: String,
    pub completed: bool,
    pub deadline: Option<DateTime<Utc>>,
}

/// 整体更新 Todo 命令
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub todo: Todo,
}

/// 删除 Todo 命令
#[derive(Debug, Clone)]
pub struct DeleteTodo {
    pub todo_id: TodoId,
}

/// 修改截止时间命令（`None` 表示清除截止时间）
#[derive(Debug, Clone)]
pub struct ChangeTodoDeadline {
    pub todo_id: TodoId,
    pub deadline: Option<DateTime<Utc>>,
}
