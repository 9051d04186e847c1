//! Persona model for crew agents.

pub mod model;

pub use model::*;
