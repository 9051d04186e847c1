//! Sequential crew execution.
//!
//! Runs bound (agent, task) pairs strictly one after another, feeding each
//! task's output forward as context for the tasks that follow. The last
//! task's output is the crew's final result. A task failure aborts the run;
//! there is no retry policy at this layer.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{Instrument, debug, error, info, info_span};

use caravan_core::agent::{CrewEngine, CrewMember};
use caravan_core::error::{CaravanError, Result};
use caravan_core::task::{CrewReport, TaskContextEntry, TaskReport, TaskStatus};

/// Engine that executes crew members in order.
pub struct SequentialExecutor;

impl SequentialExecutor {
    /// Creates a new `SequentialExecutor` instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrewEngine for SequentialExecutor {
    async fn run(&self, members: &[CrewMember]) -> Result<CrewReport> {
        for member in members {
            debug!(
                task = %member.task.name,
                persona = %member.agent.persona_name(),
                status = ?TaskStatus::Pending,
                "task queued"
            );
        }

        let mut context: Vec<TaskContextEntry> = Vec::new();
        let mut reports: Vec<TaskReport> = Vec::new();

        for member in members {
            let task = &member.task;
            let persona = member.agent.persona_name();
            let span = info_span!("task", name = %task.name, persona = %persona);

            info!(parent: &span, status = ?TaskStatus::Running, "task started");
            let started_at = Utc::now().to_rfc3339();

            let result = member
                .agent
                .execute(task, &context)
                .instrument(span.clone())
                .await;

            match result {
                Ok(output) => {
                    let finished_at = Utc::now().to_rfc3339();
                    info!(
                        parent: &span,
                        status = ?TaskStatus::Completed,
                        output_chars = output.len(),
                        "task completed"
                    );
                    context.push(TaskContextEntry::new(task.name.clone(), output.clone()));
                    reports.push(TaskReport {
                        task_id: task.id.clone(),
                        task_name: task.name.clone(),
                        persona: persona.to_string(),
                        status: TaskStatus::Completed,
                        output,
                        started_at,
                        finished_at,
                    });
                }
                Err(err) => {
                    error!(parent: &span, status = ?TaskStatus::Failed, error = %err, "task failed");
                    return Err(CaravanError::execution(format!(
                        "task '{}' failed: {}",
                        task.name, err
                    )));
                }
            }
        }

        let final_output = reports
            .last()
            .map(|report| report.output.clone())
            .unwrap_or_default();

        Ok(CrewReport {
            final_output,
            tasks: reports,
        })
    }
}
