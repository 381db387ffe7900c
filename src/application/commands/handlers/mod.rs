//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod todo_handlers;

pub use todo_handlers::*;
