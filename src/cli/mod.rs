mod args;
mod commands;

pub use args::Cli;
pub use commands::{run, App};
