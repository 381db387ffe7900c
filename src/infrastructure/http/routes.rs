//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                  GET     健康检查
//! - /todos                 POST    创建 Todo
//! - /todos                 PUT     整体更新 Todo
//! - /todos?pageNumber=&pageSize=  GET  分页列表（空页返回 204）
//! - /todos/count           GET     Todo 总数
//! - /todos/deadline        PUT     修改截止时间
//! - /todos/:id             GET     获取单个 Todo
//! - /todos/:id             DELETE  删除 Todo

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/todos", todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .put(handlers::update_todo),
        )
        .route("/count", get(handlers::count_todos))
        .route("/deadline", put(handlers::change_deadline))
        .route(
            "/:id",
            get(handlers::get_todo).delete(handlers::delete_todo),
        )
}
