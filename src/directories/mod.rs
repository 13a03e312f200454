//! # Collaborator Directories
//!
//! Read interfaces over tenant-owned data that the onboarding checks consume
//! but do not own: project ids, members, and per-provider integrations.
//! [`postgres`] provides the implementations backed by the product database;
//! tests and embedding services can supply their own.

pub mod postgres;

use async_trait::async_trait;

use crate::constants::IntegrationProvider;
use crate::error::Result;
use crate::models::{Integration, Member};

pub use postgres::{PgIntegrationDirectory, PgMemberDirectory, PgProjectDirectory};

/// Lists the projects that belong to a tenant
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Ids of the tenant's active projects; empty for unknown tenants
    async fn list_project_ids(&self, tenant_id: i64) -> Result<Vec<i64>>;
}

/// Lists the members of a tenant
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    async fn list_members(&self, tenant_id: i64) -> Result<Vec<Member>>;
}

/// Lists the integrations of a single provider kind configured for a tenant
#[async_trait]
pub trait IntegrationDirectory: Send + Sync {
    fn provider(&self) -> IntegrationProvider;

    async fn list_all(&self, tenant_id: i64) -> Result<Vec<Integration>>;
}
