//! Ping Handler
//!
//! 存活探测，不访问数据库

use axum::Json;
use serde::Serialize;

/// 服务标识与版本
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl ServiceStatus {
    fn up() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME"),
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /ping
pub async fn ping() -> Json<ServiceStatus> {
    Json(ServiceStatus::up())
}
