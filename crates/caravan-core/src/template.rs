//! Prompt template rendering.
//!
//! Task descriptions are minijinja templates interpolated exactly once, at
//! crew construction. Rendering is strict: a placeholder with no matching
//! value is an error, not an empty string, so prompt typos surface before
//! any agent runs.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::Result;

/// Renders a one-off template against the given context.
pub fn render_strict<S: Serialize>(source: &str, ctx: &S) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let rendered = env.render_str(source, ctx)?;
    Ok(rendered)
}
