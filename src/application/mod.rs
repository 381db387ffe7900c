//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（通用 Repository、TodoRepositoryPort）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    ChangeTodoDeadline, CreateTodo, DeleteTodo, UpdateTodo,
    // Handlers
    handlers::{ChangeDeadlineHandler, CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler},
};

pub use error::ApplicationError;

pub use ports::{
    Entity, PageError, PageRequest, Repository, RepositoryError, TodoRepositoryPort,
};

pub use queries::{
    CountTodos, GetTodo, ListTodos,
    // Handlers
    handlers::{CountTodosHandler, GetTodoHandler, ListTodosHandler},
};
