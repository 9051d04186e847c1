//! PersonaAgent - wraps a chat backend with a persona and its tools.
//!
//! Before each task the agent runs the persona's bound tools once, with the
//! task's interpolated description as the query, and embeds their results in
//! the prompt alongside the persona profile and the outputs of earlier tasks.
//! Tool failures abort the task; nothing is sent to the backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use caravan_core::agent::{ChatBackend, TaskAgent};
use caravan_core::error::Result;
use caravan_core::persona::Persona;
use caravan_core::task::{Task, TaskContextEntry};
use caravan_core::template::render_strict;
use caravan_core::tool::{Tool, ToolContext, ToolName};
use caravan_core::trip::TripRequest;

const PERSONA_TEMPLATE: &str = "\
# Persona Profile
**Role**: {{ role }}

## Background
{{ backstory }}

## Goal
{{ goal }}";

/// An agent that executes tasks as a configured persona.
pub struct PersonaAgent<T: ChatBackend> {
    backend: T,
    persona: Persona,
    tools: Vec<Arc<dyn Tool>>,
    request: TripRequest,
}

impl<T: ChatBackend> PersonaAgent<T> {
    /// Creates an agent from a backend, a persona, its resolved tools, and
    /// the trip request the tools draw their inputs from.
    pub fn new(
        backend: T,
        persona: Persona,
        tools: Vec<Arc<dyn Tool>>,
        request: TripRequest,
    ) -> Self {
        Self {
            backend,
            persona,
            tools,
            request,
        }
    }

    fn profile(&self) -> Result<String> {
        let mut profile = render_strict(PERSONA_TEMPLATE, &self.persona)?;
        if !self.tools.is_empty() {
            profile.push_str("\n\n## Tools");
            for tool in &self.tools {
                profile.push_str(&format!("\n- {}: {}", tool.name(), tool.description()));
            }
        }
        Ok(profile)
    }

    async fn run_tools(&self, task: &Task) -> Result<Vec<(ToolName, String)>> {
        let mut results = Vec::new();
        for tool in &self.tools {
            let ctx = ToolContext {
                query: task.description.clone(),
                request: self.request.clone(),
            };
            debug!(persona = %self.persona.name, tool = %tool.name(), "running tool");
            let output = tool.run(&ctx).await?;
            results.push((tool.name(), output));
        }
        Ok(results)
    }

    async fn assemble_prompt(&self, task: &Task, context: &[TaskContextEntry]) -> Result<String> {
        let mut sections = vec![self.profile()?];

        if !context.is_empty() {
            let mut block = String::from("# Context from Earlier Tasks");
            for entry in context {
                block.push_str(&format!("\n\n## {}\n{}", entry.task_name, entry.output));
            }
            sections.push(block);
        }

        let tool_results = self.run_tools(task).await?;
        if !tool_results.is_empty() {
            let mut block = String::from("# Tool Results");
            for (name, output) in &tool_results {
                block.push_str(&format!("\n\n## {}\n{}", name, output));
            }
            sections.push(block);
        }

        sections.push(format!("# Task\n{}", task.description));
        sections.push(format!("# Expected Output\n{}", task.expected_output));

        Ok(sections.join("\n\n"))
    }
}

#[async_trait]
impl<T: ChatBackend> TaskAgent for PersonaAgent<T> {
    fn persona_name(&self) -> &str {
        &self.persona.name
    }

    async fn execute(&self, task: &Task, context: &[TaskContextEntry]) -> Result<String> {
        let prompt = self.assemble_prompt(task, context).await?;
        debug!(
            persona = %self.persona.name,
            task = %task.name,
            prompt_chars = prompt.len(),
            "dispatching to backend"
        );
        self.backend.chat_complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravan_core::error::CaravanError;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct RecordingBackend {
        calls: Arc<Mutex<Vec<String>>>,
        response: String,
    }

    impl RecordingBackend {
        fn new(response: &str) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                response: response.to_string(),
            }
        }

        async fn last_prompt(&self) -> Option<String> {
            self.calls.lock().await.last().cloned()
        }

        async fn call_count(&self) -> usize {
            self.calls.lock().await.len()
        }
    }

    #[async_trait]
    impl ChatBackend for RecordingBackend {
        async fn chat_complete(&self, prompt: &str) -> Result<String> {
            self.calls.lock().await.push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    struct StaticTool {
        name: ToolName,
        output: String,
    }

    #[async_trait]
    impl Tool for StaticTool {
        fn name(&self) -> ToolName {
            self.name
        }

        fn description(&self) -> &str {
            "Static test tool."
        }

        async fn run(&self, _ctx: &ToolContext) -> Result<String> {
            Ok(self.output.clone())
        }
    }

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> ToolName {
            ToolName::DuckDuckGoSearch
        }

        fn description(&self) -> &str {
            "Always fails."
        }

        async fn run(&self, _ctx: &ToolContext) -> Result<String> {
            Err(CaravanError::backend(Some(500), "search exploded"))
        }
    }

    fn researcher() -> Persona {
        Persona::new(
            "research_agent",
            "Travel Researcher",
            "Find the best destinations",
            "Knows every coastline in India.",
        )
    }

    fn request() -> TripRequest {
        TripRequest::new("beaches", 30000.0, 3).unwrap()
    }

    fn research_task() -> Task {
        Task::bind(
            "research_destinations",
            "Research beach destinations in India.",
            "A list of destinations",
            "research_agent",
        )
    }

    #[tokio::test]
    async fn prompt_carries_profile_task_and_expected_output() {
        let backend = RecordingBackend::new("Goa it is.");
        let agent = PersonaAgent::new(backend.clone(), researcher(), Vec::new(), request());

        let output = agent.execute(&research_task(), &[]).await.unwrap();
        assert_eq!(output, "Goa it is.");

        let prompt = backend.last_prompt().await.unwrap();
        assert!(prompt.contains("**Role**: Travel Researcher"));
        assert!(prompt.contains("Knows every coastline in India."));
        assert!(prompt.contains("# Task\nResearch beach destinations in India."));
        assert!(prompt.contains("# Expected Output\nA list of destinations"));
        assert!(!prompt.contains("# Context from Earlier Tasks"));
        assert!(!prompt.contains("# Tool Results"));
    }

    #[tokio::test]
    async fn earlier_task_outputs_are_fed_forward() {
        let backend = RecordingBackend::new("ok");
        let agent = PersonaAgent::new(backend.clone(), researcher(), Vec::new(), request());

        let context = vec![TaskContextEntry::new(
            "research_destinations",
            "Goa and Gokarna look promising.",
        )];
        agent.execute(&research_task(), &context).await.unwrap();

        let prompt = backend.last_prompt().await.unwrap();
        assert!(prompt.contains("# Context from Earlier Tasks"));
        assert!(prompt.contains("## research_destinations\nGoa and Gokarna look promising."));
    }

    #[tokio::test]
    async fn tool_results_are_primed_into_the_prompt() {
        let backend = RecordingBackend::new("ok");
        let tool = Arc::new(StaticTool {
            name: ToolName::BudgetCalculator,
            output: "Suggested daily spending (in INR):".to_string(),
        });
        let agent = PersonaAgent::new(backend.clone(), researcher(), vec![tool], request());

        agent.execute(&research_task(), &[]).await.unwrap();

        let prompt = backend.last_prompt().await.unwrap();
        assert!(prompt.contains("## Tools\n- BudgetCalculator: Static test tool."));
        assert!(prompt.contains("# Tool Results"));
        assert!(prompt.contains("## BudgetCalculator\nSuggested daily spending (in INR):"));
    }

    #[tokio::test]
    async fn tool_failure_aborts_before_the_backend_is_called() {
        let backend = RecordingBackend::new("never seen");
        let agent = PersonaAgent::new(
            backend.clone(),
            researcher(),
            vec![Arc::new(FailingTool)],
            request(),
        );

        let err = agent.execute(&research_task(), &[]).await.unwrap_err();
        assert!(err.to_string().contains("search exploded"));
        assert_eq!(backend.call_count().await, 0);
    }

    #[tokio::test]
    async fn exposes_the_persona_name() {
        let agent = PersonaAgent::new(
            RecordingBackend::new("ok"),
            researcher(),
            Vec::new(),
            request(),
        );
        assert_eq!(agent.persona_name(), "research_agent");
    }
}
