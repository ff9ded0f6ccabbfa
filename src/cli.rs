//! Command-line surface: argument parser and one handler per command.

pub mod commands;
pub mod parser;
