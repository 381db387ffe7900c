//! Todo Queries

use crate::domain::TodoId;

/// 分页列出 Todo 查询
///
/// 原始参数，未校验；校验在 handler 中完成
#[derive(Debug, Clone)]
pub struct ListTodos {
    pub page_number: i64,
    pub page_size: i64,
}

/// 统计 Todo 数量查询
#[derive(Debug, Clone)]
pub struct CountTodos;

/// 获取单个 Todo 查询
#[derive(Debug, Clone)]
pub struct GetTodo {
    pub todo_id: TodoId,
}
