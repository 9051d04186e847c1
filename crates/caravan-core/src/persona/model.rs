//! Persona data model.
//!
//! A persona is the identity an agent adopts while executing a task: a role
//! line, a goal, a backstory paragraph, and the set of tools it is allowed to
//! invoke. Personas are loaded from configuration and referenced by name from
//! task definitions.

use serde::{Deserialize, Serialize};

use crate::tool::ToolName;

/// A named agent persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persona {
    /// Stable identifier tasks reference, e.g. "research_agent"
    pub name: String,
    /// Short role line, e.g. "Travel Researcher"
    pub role: String,
    /// What the persona optimizes for
    pub goal: String,
    /// Prose identity woven into the system prompt
    pub backstory: String,
    /// Tools the persona may invoke while executing a task
    #[serde(default)]
    pub tools: Vec<ToolName>,
}

impl Persona {
    /// Creates a persona with no tool grants.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            tools: Vec::new(),
        }
    }

    /// Sets the persona's tool grants.
    pub fn with_tools(mut self, tools: Vec<ToolName>) -> Self {
        self.tools = tools;
        self
    }

    /// Whether this persona is allowed to invoke the given tool.
    pub fn allows(&self, tool: ToolName) -> bool {
        self.tools.contains(&tool)
    }
}
