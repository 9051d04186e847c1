//! Capability contracts the crew is assembled from.
//!
//! Concrete vendors live in other crates: the Ollama chat agent and persona
//! wrapper in `caravan-interaction`, the sequential engine in
//! `caravan-execution`. Tests substitute scripted fakes for any of these.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::task::{CrewReport, Task, TaskContextEntry};

/// A chat-completion backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Checks that the backend is reachable before any work is submitted.
    ///
    /// Backends without a remote dependency keep the default, which always
    /// succeeds.
    async fn probe(&self) -> Result<()> {
        Ok(())
    }

    /// Sends one prompt and returns the completion text.
    async fn chat_complete(&self, prompt: &str) -> Result<String>;
}

/// An agent that executes bound tasks as a particular persona.
#[async_trait]
pub trait TaskAgent: Send + Sync {
    /// Name of the persona this agent speaks as.
    fn persona_name(&self) -> &str;

    /// Executes one task, with earlier task results as context.
    async fn execute(&self, task: &Task, context: &[TaskContextEntry]) -> Result<String>;
}

/// A bound (agent, task) pair, ready for the engine.
#[derive(Clone)]
pub struct CrewMember {
    pub agent: Arc<dyn TaskAgent>,
    pub task: Task,
}

impl CrewMember {
    pub fn new(agent: Arc<dyn TaskAgent>, task: Task) -> Self {
        Self { agent, task }
    }
}

impl fmt::Debug for CrewMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrewMember")
            .field("agent", &self.agent.persona_name())
            .field("task", &self.task)
            .finish()
    }
}

/// Runs crew members in order and produces the run transcript.
#[async_trait]
pub trait CrewEngine: Send + Sync {
    async fn run(&self, members: &[CrewMember]) -> Result<CrewReport>;
}
