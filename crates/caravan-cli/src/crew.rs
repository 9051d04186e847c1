//! Crew assembly.
//!
//! Turns validated configuration plus one trip request into bound
//! (agent, task) pairs. Everything that can fail here fails before the
//! first task runs: unknown task or persona names, unbound tools and bad
//! description templates are all construction errors.

use std::sync::Arc;

use anyhow::{Context, Result};

use caravan_core::config::CrewConfig;
use caravan_core::template::render_strict;
use caravan_core::tools::BudgetCalculator;
use caravan_core::{CrewMember, Task, ToolRegistry, TripRequest};
use caravan_interaction::{DuckDuckGoSearch, OllamaApiAgent, PersonaAgent};

/// Task names in execution order. Each task sees the outputs of the
/// tasks before it.
pub const TASK_SEQUENCE: [&str; 3] = [
    "research_destinations",
    "analyze_budget",
    "create_itinerary",
];

/// Registers every tool personas may declare in configuration.
pub fn build_registry() -> ToolRegistry {
    ToolRegistry::new()
        .register(Arc::new(DuckDuckGoSearch::new()))
        .register(Arc::new(BudgetCalculator))
}

/// Binds each task in [`TASK_SEQUENCE`] to its persona, tools and backend.
pub fn build_crew(
    config: &CrewConfig,
    registry: &ToolRegistry,
    backend: &OllamaApiAgent,
    request: &TripRequest,
) -> Result<Vec<CrewMember>> {
    let mut members = Vec::with_capacity(TASK_SEQUENCE.len());
    for task_name in TASK_SEQUENCE {
        let task_config = config.task(task_name)?;
        let persona = config.persona(&task_config.agent)?;

        let description = render_strict(&task_config.description, request)
            .with_context(|| format!("interpolating description of task '{task_name}'"))?;
        let task = Task::bind(
            task_name,
            description,
            task_config.expected_output.clone(),
            persona.name.clone(),
        );

        let tools = registry.resolve(&persona.tools)?;
        let agent = PersonaAgent::new(backend.clone(), persona.clone(), tools, request.clone());
        members.push(CrewMember::new(Arc::new(agent), task));
    }
    Ok(members)
}
