//! Tool contracts and the fixed name→tool table.
//!
//! Personas declare tools by name in configuration. The names form a closed
//! set: configuration entries parse into [`ToolName`], and the driver resolves
//! each declared name against a [`ToolRegistry`] before any task executes.
//! Both an unknown name and a name with no registered binding are fatal
//! construction errors.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{CaravanError, Result};
use crate::trip::TripRequest;

/// Names of the tools a persona may declare.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum ToolName {
    /// Web search via DuckDuckGo
    DuckDuckGoSearch,
    /// Daily budget breakdown across fixed categories
    BudgetCalculator,
}

/// Parses raw tool names from configuration into the closed [`ToolName`] set.
///
/// Returns a `Config` error naming the offending entry and listing the valid
/// names, so a typo in `agents.toml` fails loudly at startup.
pub fn parse_tool_names(raw: &[String]) -> Result<Vec<ToolName>> {
    raw.iter()
        .map(|name| {
            ToolName::from_str(name).map_err(|_| {
                let known = ToolName::iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                CaravanError::config(format!(
                    "unknown tool name '{name}' (expected one of: {known})"
                ))
            })
        })
        .collect()
}

/// Inputs available to a tool invocation.
///
/// Each tool picks the fields it needs: the search tool uses the query text,
/// the budget tool uses the numeric request fields.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Free-text query derived from the task being executed
    pub query: String,
    /// The trip request, for tools that work on its numeric fields
    pub request: TripRequest,
}

/// A callable capability bound to a persona.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The fixed name this tool is registered under.
    fn name(&self) -> ToolName;

    /// One-line description surfaced in agent prompts.
    fn description(&self) -> &str;

    /// Runs the tool. Failures propagate to the invoking task step; this
    /// layer defines no retry policy.
    async fn run(&self, ctx: &ToolContext) -> Result<String>;
}

impl fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Fixed name→tool table the driver resolves persona declarations against.
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool under its own name, replacing any previous binding.
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.insert(tool.name(), tool);
        self
    }

    /// Looks up a single tool binding.
    pub fn get(&self, name: ToolName) -> Result<Arc<dyn Tool>> {
        self.tools
            .get(&name)
            .cloned()
            .ok_or_else(|| CaravanError::not_found("tool", name.to_string()))
    }

    /// Resolves a persona's declared tool names into bound tools.
    ///
    /// A declared name with no binding in the table is a fatal lookup error,
    /// raised before any task executes.
    pub fn resolve(&self, names: &[ToolName]) -> Result<Vec<Arc<dyn Tool>>> {
        names.iter().map(|&name| self.get(name)).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
