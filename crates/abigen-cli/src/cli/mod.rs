mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{NameParams, NamesParams, TimeParams};

/// Output format for name and time commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
