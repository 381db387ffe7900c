//! Todo Service - 待办事项 Web 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: Todo 实体、创建草稿、标题校验
//!
//! 应用层 (application/):
//! - Ports: 通用 Repository<E> 与 TodoRepositoryPort
//! - Commands: 创建、更新、删除、修改截止时间
//! - Queries: 分页列表、计数、单条查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API，统一失败边界
//! - Persistence: SQLite 通用仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
