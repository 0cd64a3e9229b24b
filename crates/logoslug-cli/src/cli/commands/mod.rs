//! CLI command handlers, one per file.

mod config;
mod process;
mod slug;

pub use config::run_config;
pub use process::run_process;
pub use slug::run_slug;
