//! Task domain model and run transcript types.

pub mod model;

pub use model::*;
