//! # Onboarding Constants
//!
//! Fixed onboarding tasks and the integration provider kinds that count toward
//! the "Integrations" task. Task names and documentation links are part of the
//! product surface and are not configurable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OnboardingError;

/// Number of custom metadata slots a project carries (`metadata_1` .. `metadata_10`).
pub const METADATA_SLOT_COUNT: usize = 10;

/// Onboarding tasks in checklist order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingTask {
    Install,
    IdentifyUsers,
    ManageUsers,
    Integrations,
}

impl OnboardingTask {
    /// All tasks, in the order the checklist reports them
    pub const ALL: [OnboardingTask; 4] = [
        OnboardingTask::Install,
        OnboardingTask::IdentifyUsers,
        OnboardingTask::ManageUsers,
        OnboardingTask::Integrations,
    ];

    pub fn task_name(&self) -> &'static str {
        match self {
            OnboardingTask::Install => "Install OpenReplay",
            OnboardingTask::IdentifyUsers => "Identify Users",
            OnboardingTask::ManageUsers => "Invite Team Members",
            OnboardingTask::Integrations => "Integrations",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            OnboardingTask::Install => "https://docs.openreplay.com/getting-started/quick-start",
            OnboardingTask::IdentifyUsers => {
                "https://docs.openreplay.com/data-privacy-security/metadata"
            }
            OnboardingTask::ManageUsers => "https://app.openreplay.com/client/manage-users",
            OnboardingTask::Integrations => "https://docs.openreplay.com/integrations",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingTask::Install => "install",
            OnboardingTask::IdentifyUsers => "identify_users",
            OnboardingTask::ManageUsers => "manage_users",
            OnboardingTask::Integrations => "integrations",
        }
    }
}

impl fmt::Display for OnboardingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.task_name())
    }
}

/// Third-party log and error-tracking providers checked by the integrations task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationProvider {
    Datadog,
    Sentry,
    Stackdriver,
}

impl IntegrationProvider {
    /// Providers in the order the integrations check consults them
    pub const ALL: [IntegrationProvider; 3] = [
        IntegrationProvider::Datadog,
        IntegrationProvider::Sentry,
        IntegrationProvider::Stackdriver,
    ];

    /// Value stored in `integrations.provider`
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationProvider::Datadog => "datadog",
            IntegrationProvider::Sentry => "sentry",
            IntegrationProvider::Stackdriver => "stackdriver",
        }
    }
}

impl fmt::Display for IntegrationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntegrationProvider {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "datadog" => Ok(IntegrationProvider::Datadog),
            "sentry" => Ok(IntegrationProvider::Sentry),
            "stackdriver" => Ok(IntegrationProvider::Stackdriver),
            other => Err(OnboardingError::InvalidInput(format!(
                "unknown integration provider: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_order_and_names() {
        let names: Vec<&str> = OnboardingTask::ALL.iter().map(|t| t.task_name()).collect();
        assert_eq!(
            names,
            vec![
                "Install OpenReplay",
                "Identify Users",
                "Invite Team Members",
                "Integrations"
            ]
        );
    }

    #[test]
    fn test_task_urls_are_absolute() {
        for task in OnboardingTask::ALL {
            assert!(task.url().starts_with("https://"), "{task} has a bad url");
        }
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!(
            "Sentry".parse::<IntegrationProvider>().unwrap(),
            IntegrationProvider::Sentry
        );
        assert_eq!(
            " datadog ".parse::<IntegrationProvider>().unwrap(),
            IntegrationProvider::Datadog
        );
        assert!("newrelic".parse::<IntegrationProvider>().is_err());
    }

    #[test]
    fn test_provider_round_trips_through_as_str() {
        for provider in IntegrationProvider::ALL {
            assert_eq!(
                provider.as_str().parse::<IntegrationProvider>().unwrap(),
                provider
            );
        }
    }
}
