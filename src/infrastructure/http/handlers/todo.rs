//! Todo HTTP Handlers
//!
//! 每个 handler 只做参数提取、调用用例、DTO 映射；
//! 错误统一经过 [`OperationBoundary::guard`]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{
    ChangeTodoDeadline, CountTodos, CreateTodo, DeleteTodo, GetTodo, ListTodos, UpdateTodo,
};
use crate::domain::{Todo, TodoId};
use crate::infrastructure::http::dto::{
    ChangeDeadlineRequest, CreateTodoRequest, ListTodosParams, TodoDto,
};
use crate::infrastructure::http::error::{ApiError, Operation, OperationBoundary};
use crate::infrastructure::http::state::AppState;

/// 创建 Todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Json<TodoDto>, ApiError> {
    let command = CreateTodo {
        title: req.title,
        completed: req.completed,
        deadline: req.deadline,
    };

    let todo = state
        .create_todo_handler
        .handle(command)
        .await
        .guard(Operation::Create)?;

    Ok(Json(TodoDto::from(todo)))
}

/// 删除 Todo
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let todo_id = TodoId::new(id);

    state
        .delete_todo_handler
        .handle(DeleteTodo { todo_id })
        .await
        .guard(Operation::Delete(todo_id))?;

    Ok(StatusCode::OK)
}

/// 整体更新 Todo
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<TodoDto>,
) -> Result<Json<TodoDto>, ApiError> {
    let todo = Todo::from(dto);
    let todo_id = todo.id;

    let updated = state
        .update_todo_handler
        .handle(UpdateTodo { todo })
        .await
        .guard(Operation::Update(todo_id))?;

    Ok(Json(TodoDto::from(updated)))
}

/// 分页获取 Todo 列表
///
/// 当前页为空时返回 204 No Content
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTodosParams>,
) -> Result<Response, ApiError> {
    let query = ListTodos {
        page_number: params.page_number.unwrap_or(1),
        page_size: params
            .page_size
            .unwrap_or_else(|| i64::from(state.default_page_size)),
    };

    let todos = state
        .list_todos_handler
        .handle(query)
        .await
        .guard(Operation::List)?;

    if todos.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dtos: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok(Json(dtos).into_response())
}

/// 获取 Todo 总数
pub async fn count_todos(State(state): State<Arc<AppState>>) -> Result<Json<u64>, ApiError> {
    let count = state
        .count_todos_handler
        .handle(CountTodos)
        .await
        .guard(Operation::Count)?;

    Ok(Json(count))
}

/// 修改截止时间
pub async fn change_deadline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChangeDeadlineRequest>,
) -> Result<StatusCode, ApiError> {
    let todo_id = TodoId::new(req.id);

    state
        .change_deadline_handler
        .handle(ChangeTodoDeadline {
            todo_id,
            deadline: req.deadline,
        })
        .await
        .guard(Operation::ChangeDeadline(todo_id))?;

    Ok(StatusCode::OK)
}

/// 获取单个 Todo
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TodoDto>, ApiError> {
    let todo_id = TodoId::new(id);

    let todo = state
        .get_todo_handler
        .handle(GetTodo { todo_id })
        .await
        .guard(Operation::Get(todo_id))?;

    Ok(Json(TodoDto::from(todo)))
}
