//! Crew configuration loading.
//!
//! Two TOML documents describe the crew: `agents.toml` (persona entries keyed
//! by persona name) and `tasks.toml` (task templates keyed by task name).
//! Both are loaded read-only at startup and validated as a pair: every task
//! must reference a configured persona, and every declared tool name must be
//! a known tool.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CaravanError, Result};
use crate::persona::Persona;
use crate::tool::parse_tool_names;

/// File name of the persona document inside the config directory.
pub const AGENTS_FILE: &str = "agents.toml";
/// File name of the task-template document inside the config directory.
pub const TASKS_FILE: &str = "tasks.toml";
/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CARAVAN_CONFIG_DIR";

/// Raw persona entry from `agents.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Raw task entry from `tasks.toml`. The description is a template; it is
/// interpolated later, at crew construction.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub description: String,
    pub expected_output: String,
    pub agent: String,
}

/// Validated crew configuration: personas plus task templates.
#[derive(Debug, Clone)]
pub struct CrewConfig {
    personas: HashMap<String, Persona>,
    tasks: HashMap<String, TaskConfig>,
}

impl CrewConfig {
    /// Loads and validates `agents.toml` and `tasks.toml` from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let agents: HashMap<String, PersonaConfig> = read_document(&dir.join(AGENTS_FILE))?;
        let tasks: HashMap<String, TaskConfig> = read_document(&dir.join(TASKS_FILE))?;
        Self::from_parts(agents, tasks)
    }

    /// Builds the validated configuration from already-parsed documents.
    pub fn from_parts(
        agents: HashMap<String, PersonaConfig>,
        tasks: HashMap<String, TaskConfig>,
    ) -> Result<Self> {
        let mut personas = HashMap::new();
        for (name, raw) in agents {
            let tools = parse_tool_names(&raw.tools)?;
            let persona =
                Persona::new(name.clone(), raw.role, raw.goal, raw.backstory).with_tools(tools);
            personas.insert(name, persona);
        }

        for (task_name, task) in &tasks {
            if !personas.contains_key(&task.agent) {
                return Err(CaravanError::config(format!(
                    "task '{}' references unknown agent '{}'",
                    task_name, task.agent
                )));
            }
        }

        Ok(Self { personas, tasks })
    }

    /// Looks up a persona by name.
    pub fn persona(&self, name: &str) -> Result<&Persona> {
        self.personas
            .get(name)
            .ok_or_else(|| CaravanError::not_found("persona", name))
    }

    /// Looks up a task template by name.
    pub fn task(&self, name: &str) -> Result<&TaskConfig> {
        self.tasks
            .get(name)
            .ok_or_else(|| CaravanError::not_found("task", name))
    }

    pub fn persona_count(&self) -> usize {
        self.personas.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Resolves the configuration directory.
///
/// Order: `$CARAVAN_CONFIG_DIR` if set, then `./config` when it exists, then
/// `~/.config/caravan`.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let local = PathBuf::from("config");
    if local.is_dir() {
        return Ok(local);
    }
    let home = dirs::home_dir()
        .ok_or_else(|| CaravanError::config("could not determine home directory"))?;
    Ok(home.join(".config").join("caravan"))
}

fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CaravanError::config(format!(
            "configuration file not found at: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let document = toml::from_str(&content)?;
    Ok(document)
}
