//! Input reading from the command line and stdin.

/// Positional-argument and stdin reading.
pub mod reader;

pub use reader::InputReader;
