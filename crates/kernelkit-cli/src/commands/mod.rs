//! CLI command handlers

pub mod chat;
pub mod init;
pub mod show;

pub use chat::run_chat;
pub use init::run_init;
pub use show::run_show;
