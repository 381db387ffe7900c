//! HTTP Error Handling
//!
//! 所有 handler 的错误都经过同一个失败边界 [`OperationBoundary::guard`]：
//! 按操作记录日志，并转换为该操作固定的错误响应

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;
use crate::domain::TodoId;

/// HTTP 层操作
///
/// 失败边界只依据操作决定日志上下文和 500 响应文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update(TodoId),
    Delete(TodoId),
    List,
    Count,
    ChangeDeadline(TodoId),
    Get(TodoId),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create_todo",
            Operation::Update(_) => "update_todo",
            Operation::Delete(_) => "delete_todo",
            Operation::List => "list_todos",
            Operation::Count => "count_todos",
            Operation::ChangeDeadline(_) => "change_deadline",
            Operation::Get(_) => "get_todo",
        }
    }

    pub fn todo_id(&self) -> Option<TodoId> {
        match self {
            Operation::Update(id)
            | Operation::Delete(id)
            | Operation::ChangeDeadline(id)
            | Operation::Get(id) => Some(*id),
            Operation::Create | Operation::List | Operation::Count => None,
        }
    }

    /// 服务端错误时返回给调用方的固定文案
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => {
                "An error occurred while creating the todo. Please try again later."
            }
            Operation::Update(_) => {
                "An error occurred while updating the todo. Please try again later."
            }
            Operation::Delete(_) => {
                "An error occurred while deleting the todo. Please try again later."
            }
            Operation::List => {
                "An error occurred while fetching the todos. Please try again later."
            }
            Operation::Count => {
                "An error occurred while fetching the todo count. Please try again later."
            }
            Operation::ChangeDeadline(_) => {
                "An error occurred while updating the todo deadline. Please try again later."
            }
            Operation::Get(_) => {
                "An error occurred while fetching the todo. Please try again later."
            }
        }
    }
}

/// API 错误
///
/// 响应体为纯文本消息，不暴露内部错误细节
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 按操作转换应用层错误并记录日志
    pub fn from_operation(operation: Operation, err: ApplicationError) -> Self {
        let todo_id = operation.todo_id().map(|id| id.value());

        match err {
            ApplicationError::NotFound { .. } => {
                tracing::warn!(
                    operation = operation.name(),
                    todo_id = ?todo_id,
                    error = %err,
                    "Resource not found"
                );
                ApiError::NotFound(err.to_string())
            }
            ApplicationError::ValidationError(msg) => {
                tracing::warn!(
                    operation = operation.name(),
                    todo_id = ?todo_id,
                    error = %msg,
                    "Bad request"
                );
                ApiError::BadRequest(msg)
            }
            ApplicationError::RepositoryError(_) => {
                tracing::error!(
                    operation = operation.name(),
                    todo_id = ?todo_id,
                    error = %err,
                    "{}",
                    operation.failure_message()
                );
                ApiError::Internal(operation.failure_message())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => (status, msg).into_response(),
            ApiError::Internal(msg) => (status, msg).into_response(),
        }
    }
}

/// 失败边界
///
/// 每个 handler 的用例结果都通过 `.guard(operation)` 转换
pub trait OperationBoundary<T> {
    fn guard(self, operation: Operation) -> Result<T, ApiError>;
}

impl<T> OperationBoundary<T> for Result<T, ApplicationError> {
    fn guard(self, operation: Operation) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::from_operation(operation, err))
    }
}
