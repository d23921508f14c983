// src/logic/mod.rs

pub mod commands;
pub mod parser;

pub use commands::{Command, CommandError, CommandResult};
pub use parser::{ParseError, parse_command};
