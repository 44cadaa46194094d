pub mod commands;

pub use commands::{Cli, Commands, ListFormat, ViewFormat, run};
