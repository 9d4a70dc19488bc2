//! Comment commands.

mod parser;

pub use parser::CommandParser;
