//! Terminal front end: output formatting and the interactive shell.

pub mod print;
pub mod shell;
