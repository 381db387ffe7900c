//! HTTP Handlers

mod ping;
mod todo;

pub use ping::*;
pub use todo::*;
