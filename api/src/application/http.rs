pub mod prompt;
pub mod server;
pub mod sidebar;
