//! SQLite Todo Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{SqliteEntity, SqliteQuery, SqliteRepository};
use crate::application::ports::{Entity, RepositoryError, TodoRepositoryPort};
use crate::domain::{NewTodo, Todo, TodoId};

/// SQLite Todo Repository
pub type SqliteTodoRepository = SqliteRepository<Todo>;

#[derive(FromRow)]
pub struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
    deadline: Option<String>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = RepositoryError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let deadline = row
            .deadline
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| RepositoryError::SerializationError(e.to_string()))
            })
            .transpose()?;

        Ok(Todo {
            id: TodoId::new(row.id),
            title: row.title,
            completed: row.completed,
            deadline,
        })
    }
}

fn encode_deadline(deadline: Option<DateTime<Utc>>) -> Option<String> {
    deadline.map(|dt| dt.to_rfc3339())
}

impl SqliteEntity for Todo {
    type Row = TodoRow;

    const TABLE: &'static str = "todos";
    const COLUMNS: &'static [&'static str] = &["title", "completed", "deadline"];

    fn from_row(row: TodoRow) -> Result<Self, RepositoryError> {
        Todo::try_from(row)
    }

    fn bind_draft<'q>(draft: &NewTodo, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(draft.title.clone())
            .bind(draft.completed)
            .bind(encode_deadline(draft.deadline))
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.clone())
            .bind(self.completed)
            .bind(encode_deadline(self.deadline))
    }
}

#[async_trait]
impl TodoRepositoryPort for SqliteTodoRepository {
    async fn update_deadline(
        &self,
        id: TodoId,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError> {
        let sql = format!(
            "UPDATE {} SET deadline = ? WHERE id = ?",
            <Todo as SqliteEntity>::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(encode_deadline(deadline))
            .bind(id.value())
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Todo::NAME, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::application::ports::{PageRequest, Repository};
    use crate::infrastructure::persistence::sqlite::test_repository;

    fn page(number: i64, size: i64) -> PageRequest {
        PageRequest::new(number, size, 100).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let repo = test_repository().await;
        let deadline = Utc.with_ymd_and_hms(2030, 3, 1, 12, 0, 0).unwrap();

        let added = repo
            .add(NewTodo::new("带截止时间").with_deadline(deadline))
            .await
            .unwrap();

        let todos = repo.list(page(1, 10)).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0], added);
        assert_eq!(todos[0].deadline, Some(deadline));
        assert!(!todos[0].completed);
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = test_repository().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(repo.add(NewTodo::new(format!("t{}", i))).await.unwrap().id);
        }

        let first = repo.list(page(1, 2)).await.unwrap();
        let second = repo.list(page(2, 2)).await.unwrap();
        let third = repo.list(page(3, 2)).await.unwrap();
        let fourth = repo.list(page(4, 2)).await.unwrap();

        let ids_of = |todos: &[Todo]| todos.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids_of(&first), ids[0..2].to_vec());
        assert_eq!(ids_of(&second), ids[2..4].to_vec());
        assert_eq!(ids_of(&third), ids[4..5].to_vec());
        assert!(fourth.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = test_repository().await;
        let added = repo.add(NewTodo::new("找我")).await.unwrap();

        assert_eq!(repo.find_by_id(added.id).await.unwrap(), Some(added));
        assert_eq!(repo.find_by_id(TodoId::new(999)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = test_repository().await;
        let ghost = Todo {
            id: TodoId::new(5),
            title: "幽灵".to_string(),
            completed: false,
            deadline: None,
        };

        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Todo", .. }));
    }

    #[tokio::test]
    async fn test_delete_decrements_count() {
        let repo = test_repository().await;
        let a = repo.add(NewTodo::new("a")).await.unwrap();
        repo.add(NewTodo::new("b")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.delete(a.id).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find_by_id(a.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(a.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_deadline_only_touches_deadline() {
        let repo = test_repository().await;
        let mut draft = NewTodo::new("只改截止时间");
        draft.completed = true;
        let added = repo.add(draft).await.unwrap();

        let deadline = Utc.with_ymd_and_hms(2032, 12, 31, 23, 59, 0).unwrap();
        repo.update_deadline(added.id, Some(deadline)).await.unwrap();
        let stored = repo.find_by_id(added.id).await.unwrap().unwrap();
        assert_eq!(stored.title, added.title);
        assert!(stored.completed);
        assert_eq!(stored.deadline, Some(deadline));

        repo.update_deadline(added.id, None).await.unwrap();
        let cleared = repo.find_by_id(added.id).await.unwrap().unwrap();
        assert!(cleared.deadline.is_none());
    }

    #[tokio::test]
    async fn test_update_deadline_missing_is_not_found() {
        let repo = test_repository().await;
        let err = repo
            .update_deadline(TodoId::new(1), Some(Utc::now()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::NotFound { entity, ref id } if entity == Todo::NAME && id == "1"
        ));
    }

    #[tokio::test]
    async fn test_corrupt_deadline_is_serialization_error() {
        let repo = test_repository().await;
        sqlx::query("INSERT INTO todos (title, completed, deadline) VALUES ('bad', 0, 'not-a-date')")
            .execute(repo.pool())
            .await
            .unwrap();

        let err = repo.list(page(1, 10)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::SerializationError(_)));
    }
}
