pub mod db;
pub mod prompt;
