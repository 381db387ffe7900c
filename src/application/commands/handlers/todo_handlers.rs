//! Todo Command Handlers

use std::sync::Arc;

use crate::application::commands::{ChangeTodoDeadline, CreateTodo, DeleteTodo, UpdateTodo};
use crate::application::error::ApplicationError;
use crate::application::ports::{Repository, TodoRepositoryPort};
use crate::domain::{NewTodo, Todo};

// ============================================================================
// CreateTodo
// ============================================================================

/// CreateTodo Handler
pub struct CreateTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl CreateTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: CreateTodo) -> Result<Todo, ApplicationError> {
        let draft = NewTodo {
            title: command.title,
            completed: command.completed,
            deadline: command.deadline,
        };
        draft.validate()?;

        let todo = self.todo_repo.add(draft).await?;

        tracing::info!(todo_id = %todo.id, title = %todo.title, "Todo created");

        Ok(todo)
    }
}

// ============================================================================
// UpdateTodo
// ============================================================================

/// UpdateTodo Handler - 整体替换
pub struct UpdateTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl UpdateTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: UpdateTodo) -> Result<Todo, ApplicationError> {
        command.todo.validate()?;

        let todo = self.todo_repo.update(&command.todo).await?;

        tracing::info!(
            todo_id = %todo.id,
            completed = todo.completed,
            "Todo updated"
        );

        Ok(todo)
    }
}

// ============================================================================
// DeleteTodo
// ============================================================================

/// DeleteTodo Handler
///
/// id 不存在时返回 NotFound，而不是静默成功
pub struct DeleteTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl DeleteTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: DeleteTodo) -> Result<(), ApplicationError> {
        self.todo_repo.delete(command.todo_id).await?;

        tracing::info!(todo_id = %command.todo_id, "Todo deleted");

        Ok(())
    }
}

// ============================================================================
// ChangeTodoDeadline
// ============================================================================

/// ChangeTodoDeadline Handler - 只修改 deadline 字段
pub struct ChangeDeadlineHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl ChangeDeadlineHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: ChangeTodoDeadline) -> Result<(), ApplicationError> {
        self.todo_repo
            .update_deadline(command.todo_id, command.deadline)
            .await?;

        tracing::info!(
            todo_id = %command.todo_id,
            deadline = ?command.deadline,
            "Todo deadline changed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::application::ports::PageRequest;
    use crate::domain::TodoId;
    use crate::infrastructure::persistence::sqlite::test_repository;

    fn create_command(title: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            completed: false,
            deadline: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = test_repository().await;
        let handler = CreateTodoHandler::new(repo.clone());

        let first = handler.handle(create_command("第一件事")).await.unwrap();
        let second = handler.handle(create_command("第二件事")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "第一件事");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let repo = test_repository().await;
        let handler = CreateTodoHandler::new(repo.clone());

        let err = handler.handle(create_command("")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = test_repository().await;
        let created = CreateTodoHandler::new(repo.clone())
            .handle(create_command("旧标题"))
            .await
            .unwrap();

        let deadline = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap();
        let replacement = Todo {
            id: created.id,
            title: "新标题".to_string(),
            completed: true,
            deadline: Some(deadline),
        };
        UpdateTodoHandler::new(repo.clone())
            .handle(UpdateTodo {
                todo: replacement.clone(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[tokio::test]
    async fn test_update_missing_todo_is_not_found() {
        let repo = test_repository().await;
        let handler = UpdateTodoHandler::new(repo);

        let err = handler
            .handle(UpdateTodo {
                todo: Todo {
                    id: TodoId::new(42),
                    title: "不存在".to_string(),
                    completed: false,
                    deadline: None,
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_from_pages() {
        let repo = test_repository().await;
        let create = CreateTodoHandler::new(repo.clone());
        let keep = create.handle(create_command("保留")).await.unwrap();
        let gone = create.handle(create_command("删除")).await.unwrap();

        DeleteTodoHandler::new(repo.clone())
            .handle(DeleteTodo { todo_id: gone.id })
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let page = repo.list(PageRequest::new(1, 10, 100).unwrap()).await.unwrap();
        assert_eq!(page, vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_missing_todo_is_not_found() {
        let repo = test_repository().await;
        let err = DeleteTodoHandler::new(repo)
            .handle(DeleteTodo {
                todo_id: TodoId::new(99),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_change_deadline_keeps_other_fields() {
        let repo = test_repository().await;
        let created = CreateTodoHandler::new(repo.clone())
            .handle(CreateTodo {
                title: "交报告".to_string(),
                completed: true,
                deadline: None,
            })
            .await
            .unwrap();

        let deadline = Utc.with_ymd_and_hms(2031, 6, 30, 18, 0, 0).unwrap();
        ChangeDeadlineHandler::new(repo.clone())
            .handle(ChangeTodoDeadline {
                todo_id: created.id,
                deadline: Some(deadline),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "交报告");
        assert!(stored.completed);
        assert_eq!(stored.deadline, Some(deadline));
    }
}
