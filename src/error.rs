//! Error types for onboarding status evaluation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for OnboardingError {
    fn from(error: config::ConfigError) -> Self {
        OnboardingError::Configuration(error.to_string())
    }
}

impl OnboardingError {
    /// True when the failure came from the backing store
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, OnboardingError::Database(_))
    }
}

pub type Result<T> = std::result::Result<T, OnboardingError>;
