//! Todo Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PageRequest, Repository, TodoRepositoryPort};
use crate::application::queries::{CountTodos, GetTodo, ListTodos};
use crate::domain::Todo;

/// ListTodos Handler
pub struct ListTodosHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
    max_page_size: u32,
}

impl ListTodosHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>, max_page_size: u32) -> Self {
        Self {
            todo_repo,
            max_page_size,
        }
    }

    pub async fn handle(&self, query: ListTodos) -> Result<Vec<Todo>, ApplicationError> {
        let page = PageRequest::new(query.page_number, query.page_size, self.max_page_size)?;
        let todos = self.todo_repo.list(page).await?;

        tracing::debug!(
            page_number = page.page_number(),
            page_size = page.page_size(),
            returned = todos.len(),
            "Todos listed"
        );

        Ok(todos)
    }
}

/// CountTodos Handler
pub struct CountTodosHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl CountTodosHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, _query: CountTodos) -> Result<u64, ApplicationError> {
        Ok(self.todo_repo.count().await?)
    }
}

/// GetTodo Handler
pub struct GetTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl GetTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, query: GetTodo) -> Result<Todo, ApplicationError> {
        self.todo_repo
            .find_by_id(query.todo_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Todo", query.todo_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::{NewTodo, TodoId};
    use crate::infrastructure::persistence::sqlite::{test_repository, SqliteTodoRepository};

    async fn seed(repo: &SqliteTodoRepository, n: usize) -> Vec<Todo> {
        let mut todos = Vec::with_capacity(n);
        for i in 1..=n {
            todos.push(repo.add(NewTodo::new(format!("Todo {}", i))).await.unwrap());
        }
        todos
    }

    #[tokio::test]
    async fn test_list_returns_requested_slice() {
        let repo = test_repository().await;
        let todos = seed(&repo, 7).await;
        let handler = ListTodosHandler::new(repo, 100);

        let page = handler
            .handle(ListTodos {
                page_number: 2,
                page_size: 3,
            })
            .await
            .unwrap();

        assert_eq!(page, todos[3..6].to_vec());
    }

    #[tokio::test]
    async fn test_list_past_end_is_empty() {
        let repo = test_repository().await;
        seed(&repo, 3).await;
        let handler = ListTodosHandler::new(repo, 100);

        let page = handler
            .handle(ListTodos {
                page_number: 2,
                page_size: 10,
            })
            .await
            .unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_non_positive_page() {
        let repo = test_repository().await;
        let handler = ListTodosHandler::new(repo, 100);

        let err = handler
            .handle(ListTodos {
                page_number: 0,
                page_size: 10,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_count_matches_persisted() {
        let repo = test_repository().await;
        seed(&repo, 4).await;

        let count = CountTodosHandler::new(repo).handle(CountTodos).await.unwrap();

        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = test_repository().await;

        let err = GetTodoHandler::new(repo)
            .handle(GetTodo {
                todo_id: TodoId::new(1),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "Todo", .. }
        ));
    }
}
