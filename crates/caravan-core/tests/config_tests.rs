//! Configuration loading against real files.

use std::fs;

use caravan_core::config::{AGENTS_FILE, CrewConfig, TASKS_FILE};
use caravan_core::ToolName;
use tempfile::TempDir;

const AGENTS_DOC: &str = r#"
[research_agent]
role = "Travel Researcher"
goal = "Find the best destinations and activities for the traveler"
backstory = "A veteran researcher who has catalogued destinations across India."
tools = ["DuckDuckGoSearch"]

[budget_agent]
role = "Budget Analyst"
goal = "Keep the trip within budget"
backstory = "A meticulous analyst who plans spending to the rupee."
tools = ["BudgetCalculator"]

[itinerary_agent]
role = "Itinerary Planner"
goal = "Assemble a day-by-day plan"
backstory = "A planner who turns research into a readable itinerary."
"#;

const TASKS_DOC: &str = r#"
[research_destinations]
description = "Research destinations for someone who likes {{ preference }}."
expected_output = "A list of destinations with suggested activities"
agent = "research_agent"

[analyze_budget]
description = "Break down a budget of {{ budget }} INR over {{ duration }} days."
expected_output = "A daily spending suggestion"
agent = "budget_agent"

[create_itinerary]
description = "Create a {{ duration }}-day itinerary for {{ preference }}."
expected_output = "A complete day-by-day plan"
agent = "itinerary_agent"
"#;

fn write_config(dir: &TempDir, agents: &str, tasks: &str) {
    fs::write(dir.path().join(AGENTS_FILE), agents).unwrap();
    fs::write(dir.path().join(TASKS_FILE), tasks).unwrap();
}

#[test]
fn loads_personas_and_tasks_from_directory() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, AGENTS_DOC, TASKS_DOC);

    let config = CrewConfig::load(dir.path()).unwrap();
    assert_eq!(config.persona_count(), 3);
    assert_eq!(config.task_count(), 3);

    let researcher = config.persona("research_agent").unwrap();
    assert_eq!(researcher.role, "Travel Researcher");
    assert_eq!(researcher.tools, vec![ToolName::DuckDuckGoSearch]);

    let planner = config.persona("itinerary_agent").unwrap();
    assert!(planner.tools.is_empty());

    let task = config.task("analyze_budget").unwrap();
    assert_eq!(task.agent, "budget_agent");
    assert!(task.description.contains("{{ budget }}"));
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(AGENTS_FILE), AGENTS_DOC).unwrap();

    let err = CrewConfig::load(dir.path()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains(TASKS_FILE));
}

#[test]
fn malformed_toml_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "role = = broken", TASKS_DOC);

    let err = CrewConfig::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("TOML"));
}

#[test]
fn task_bound_to_unknown_agent_fails_load() {
    let tasks = r#"
[create_itinerary]
description = "Create a plan."
expected_output = "A plan"
agent = "ghost_agent"
"#;
    let dir = TempDir::new().unwrap();
    write_config(&dir, AGENTS_DOC, tasks);

    let err = CrewConfig::load(dir.path()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("ghost_agent"));
}

#[test]
fn unknown_tool_name_fails_load() {
    let agents = r#"
[research_agent]
role = "Travel Researcher"
goal = "Find destinations"
backstory = "A researcher."
tools = ["GoogleSearch"]
"#;
    let dir = TempDir::new().unwrap();
    write_config(&dir, agents, TASKS_DOC);

    let err = CrewConfig::load(dir.path()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("GoogleSearch"));
}
