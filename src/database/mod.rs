//! # Database Operations
//!
//! Connection pooling and the read-only existence queries behind the
//! onboarding checks.
//!
//! ## Key Components
//!
//! - [`connection`] - Pool construction from [`DatabaseConfig`](crate::config::DatabaseConfig)
//! - [`existence_queries`] - `EXISTS` probes scoped by an explicit tenant parameter
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use onboarding_status::config::DatabaseConfig;
//! use onboarding_status::database::DatabaseConnection;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::new(&DatabaseConfig::default()).await?;
//! assert!(db.health_check().await?);
//! db.close().await;
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod existence_queries;

pub use connection::DatabaseConnection;
pub use existence_queries::{any_identified_user, any_recorded_session};
