//! CLI command handlers for Tailwind Colors.
//!
//! Every operation of the picker is available headlessly for scripting and
//! testing. Each command lives in its own module with an `execute()` that
//! returns a [`common::CliResult`].

pub mod common;
pub mod config;
pub mod convert;
pub mod history;
pub mod notations;
pub mod palette;
pub mod pick;
pub mod versions;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use history::HistoryArgs;
pub use notations::NotationsArgs;
pub use palette::PaletteArgs;
pub use pick::PickArgs;
pub use versions::VersionsArgs;
