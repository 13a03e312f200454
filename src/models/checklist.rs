use serde::{Deserialize, Serialize};

use crate::constants::OnboardingTask;

/// Completion status of a single onboarding task
///
/// Computed on every call and never persisted. The documentation link is
/// serialized as `URL` to match the response shape the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub task: String,
    pub done: bool,
    #[serde(rename = "URL")]
    pub url: String,
}

impl ChecklistEntry {
    pub fn new(task: OnboardingTask, done: bool) -> Self {
        Self {
            task: task.task_name().to_string(),
            done,
            url: task.url().to_string(),
        }
    }
}
