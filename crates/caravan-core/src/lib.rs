pub mod agent;
pub mod config;
pub mod error;
pub mod persona;
pub mod task;
pub mod template;
pub mod tool;
pub mod tools;
pub mod trip;

// Re-export common error type
pub use error::{CaravanError, Result};

// Re-export the domain types most callers need
pub use agent::{ChatBackend, CrewEngine, CrewMember, TaskAgent};
pub use persona::Persona;
pub use task::{CrewReport, Task, TaskContextEntry, TaskReport, TaskStatus};
pub use tool::{Tool, ToolContext, ToolName, ToolRegistry};
pub use trip::TripRequest;
