//! Todo Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("标题不能为空")]
    EmptyTitle,

    #[error("标题长度不能超过 {max} 字符，实际 {actual}")]
    TitleTooLong { max: usize, actual: usize },
}
