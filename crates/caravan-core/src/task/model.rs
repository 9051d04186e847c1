//! Task domain model.
//!
//! A task is a unit of work with an already-interpolated prompt, bound to
//! exactly one persona. Tasks are built once by the driver and never mutated;
//! the execution engine reports on them through [`TaskReport`] and
//! [`CrewReport`] rather than by changing task state.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the current status of a task in the crew run.
///
/// Tasks progress through these states as the engine works the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// The task is queued and has not started yet.
    Pending,
    /// The task is currently being executed by its persona.
    Running,
    /// The task completed successfully.
    Completed,
    /// The task failed during execution.
    Failed,
}

/// A unit of work bound to one persona, with its prompt text fixed.
///
/// The description is interpolated exactly once, before binding; by the time
/// a `Task` exists there are no placeholders left in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// A unique identifier for the task.
    pub id: String,
    /// The task's configuration name, e.g. "research_destinations".
    pub name: String,
    /// The fully interpolated prompt text.
    pub description: String,
    /// What a good answer looks like, passed to the persona verbatim.
    pub expected_output: String,
    /// Name of the persona this task is bound to.
    pub persona: String,
    /// When the task was bound, RFC 3339.
    pub created_at: String,
}

impl Task {
    /// Binds an interpolated task to a persona, stamping id and creation time.
    pub fn bind(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            persona: persona.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// One earlier task's result, fed forward into later tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContextEntry {
    /// Name of the task that produced the output.
    pub task_name: String,
    /// The task's full textual output.
    pub output: String,
}

impl TaskContextEntry {
    pub fn new(task_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            output: output.into(),
        }
    }
}

// ============================================================================
// Run transcript
// ============================================================================

/// The record of one executed task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    /// The executed task's identifier.
    pub task_id: String,
    /// The executed task's name.
    pub task_name: String,
    /// The persona that executed it.
    pub persona: String,
    /// Terminal status of the task.
    pub status: TaskStatus,
    /// The task's full textual output.
    pub output: String,
    /// When execution started, RFC 3339.
    pub started_at: String,
    /// When execution finished, RFC 3339.
    pub finished_at: String,
}

/// The transcript of a whole crew run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewReport {
    /// The last task's output, which is the run's result.
    pub final_output: String,
    /// Per-task records in execution order.
    pub tasks: Vec<TaskReport>,
}

impl CrewReport {
    /// Number of tasks that reached [`TaskStatus::Completed`].
    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count()
    }

    /// One-line human summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "{}/{} tasks completed",
            self.completed_count(),
            self.tasks.len()
        )
    }
}
