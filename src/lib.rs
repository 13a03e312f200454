#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections

//! # Onboarding Status
//!
//! Onboarding checklist evaluation for a multi-tenant session replay product.
//!
//! ## Overview
//!
//! For a tenant, the crate answers four questions with read-only queries against
//! the product database:
//!
//! - has any session been recorded under the tenant's projects?
//! - has the tenant identified users, through session user ids or project metadata?
//! - has anyone besides the account creator joined the tenant?
//! - is any log or error-tracking integration configured?
//!
//! Each answer becomes a [`ChecklistEntry`] carrying the task name, a `done`
//! flag and a documentation link. Flags are recomputed on every call.
//!
//! ## Module Organization
//!
//! - [`services`] - [`OnboardingStatusService`], the checklist entry points
//! - [`directories`] - Project, member and integration lookups the service consumes
//! - [`database`] - Pool construction and the `EXISTS` probes
//! - [`models`] - Read models and the checklist entry
//! - [`constants`] - Task and provider enums
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onboarding_status::OnboardingStatusService;
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let service = OnboardingStatusService::from_pool(pool);
//! for entry in service.get_checklist(42).await? {
//!     println!("{}: {}", entry.task, entry.done);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Integration tests use SQLx native testing with the schema in `migrations/`:
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests, requires DATABASE_URL
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod directories;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::{DatabaseConfig, LoggingConfig, OnboardingConfig};
pub use constants::{IntegrationProvider, OnboardingTask};
pub use database::DatabaseConnection;
pub use directories::{IntegrationDirectory, MemberDirectory, ProjectDirectory};
pub use error::{OnboardingError, Result};
pub use models::ChecklistEntry;
pub use services::OnboardingStatusService;
