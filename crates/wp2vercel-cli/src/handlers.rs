//! Command handlers for CLI subcommands
//!
//! Each submodule implements one subcommand; shared file loading lives in
//! `utils`.

mod completions;
mod config;
mod convert;
mod preview;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use convert::handle_convert;
pub use preview::handle_preview;
pub use validate::handle_validate;
