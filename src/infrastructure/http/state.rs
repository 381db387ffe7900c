//! Application State
//!
//! 所有 Command/Query Handlers 共享同一个 Todo Repository

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ChangeDeadlineHandler, CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler,
    // Query handlers
    CountTodosHandler, GetTodoHandler, ListTodosHandler,
    // Ports
    TodoRepositoryPort,
};
use crate::config::PaginationConfig;

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_todo_handler: CreateTodoHandler,
    pub update_todo_handler: UpdateTodoHandler,
    pub delete_todo_handler: DeleteTodoHandler,
    pub change_deadline_handler: ChangeDeadlineHandler,

    // ========== Query Handlers ==========
    pub list_todos_handler: ListTodosHandler,
    pub count_todos_handler: CountTodosHandler,
    pub get_todo_handler: GetTodoHandler,

    /// 未指定 pageSize 时使用
    pub default_page_size: u32,
}

impl AppState {
    /// 创建应用状态
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>, pagination: &PaginationConfig) -> Self {
        Self {
            // Command handlers
            create_todo_handler: CreateTodoHandler::new(todo_repo.clone()),
            update_todo_handler: UpdateTodoHandler::new(todo_repo.clone()),
            delete_todo_handler: DeleteTodoHandler::new(todo_repo.clone()),
            change_deadline_handler: ChangeDeadlineHandler::new(todo_repo.clone()),

            // Query handlers
            list_todos_handler: ListTodosHandler::new(todo_repo.clone(), pagination.max_page_size),
            count_todos_handler: CountTodosHandler::new(todo_repo.clone()),
            get_todo_handler: GetTodoHandler::new(todo_repo),

            default_page_size: pagination.default_page_size,
        }
    }
}
