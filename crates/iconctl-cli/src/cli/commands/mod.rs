//! CLI command handlers, one per subcommand.

mod config;
mod fetch;
mod rename;

pub use config::run_config;
pub use fetch::run_fetch;
pub use rename::run_rename;
