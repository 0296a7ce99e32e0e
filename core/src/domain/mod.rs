pub mod common;
pub mod prompt;
