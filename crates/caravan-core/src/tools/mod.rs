//! Built-in tools with no I/O dependencies.

pub mod budget;

pub use budget::*;
