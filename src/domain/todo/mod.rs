//! Todo Context - 待办事项限界上下文
//!
//! 职责:
//! - Todo 实体
//! - 创建草稿（未分配 ID 的 Todo）
//! - 标题校验

mod entity;
mod errors;
mod value_objects;

pub use entity::{NewTodo, Todo};
pub use errors::TodoError;
pub use value_objects::TodoId;
