//! Data Transfer Objects
//!
//! TodoDto 与领域 Todo 字段一一对应，双向映射为显式字段拷贝

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Todo, TodoId};

// ============================================================================
// Todo DTOs
// ============================================================================

/// Todo 传输对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.value(),
            title: todo.title,
            completed: todo.completed,
            deadline: todo.deadline,
        }
    }
}

impl From<TodoDto> for Todo {
    fn from(dto: TodoDto) -> Self {
        Self {
            id: TodoId::new(dto.id),
            title: dto.title,
            completed: dto.completed,
            deadline: dto.deadline,
        }
    }
}

/// 创建 Todo 请求
///
/// 载荷中的 id（如果有）被忽略，由存储层分配
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// 修改截止时间请求；deadline 为 null 表示清除
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDeadlineRequest {
    pub id: i64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// 分页查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dto_mirrors_todo() {
        let deadline = Utc.with_ymd_and_hms(2030, 5, 20, 8, 30, 0).unwrap();
        let todo = Todo {
            id: TodoId::new(3),
            title: "镜像".to_string(),
            completed: true,
            deadline: Some(deadline),
        };

        let dto = TodoDto::from(todo.clone());
        assert_eq!(dto.id, 3);
        assert_eq!(dto.title, "镜像");
        assert!(dto.completed);
        assert_eq!(dto.deadline, Some(deadline));

        assert_eq!(Todo::from(dto), todo);
    }

    #[test]
    fn test_dto_json_shape() {
        let dto = TodoDto {
            id: 1,
            title: "json".to_string(),
            completed: false,
            deadline: None,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "json", "completed": false, "deadline": null})
        );
    }

    #[test]
    fn test_create_request_ignores_id_and_defaults_flags() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"id": 99, "title": "新的"}"#).unwrap();
        assert_eq!(req.title, "新的");
        assert!(!req.completed);
        assert!(req.deadline.is_none());
    }
}
