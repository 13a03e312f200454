//! PostgreSQL-backed directories. Each call checks a connection out of the
//! pool for the duration of one query.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{IntegrationDirectory, MemberDirectory, ProjectDirectory};
use crate::constants::IntegrationProvider;
use crate::error::Result;
use crate::models::{Integration, Member, Project};

#[derive(Debug, Clone)]
pub struct PgProjectDirectory {
    pool: PgPool,
}

impl PgProjectDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectDirectory for PgProjectDirectory {
    async fn list_project_ids(&self, tenant_id: i64) -> Result<Vec<i64>> {
        Ok(Project::list_active_ids(&self.pool, tenant_id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct PgMemberDirectory {
    pool: PgPool,
}

impl PgMemberDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberDirectory for PgMemberDirectory {
    async fn list_members(&self, tenant_id: i64) -> Result<Vec<Member>> {
        Ok(Member::list_for_tenant(&self.pool, tenant_id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct PgIntegrationDirectory {
    pool: PgPool,
    provider: IntegrationProvider,
}

impl PgIntegrationDirectory {
    pub fn new(pool: PgPool, provider: IntegrationProvider) -> Self {
        Self { pool, provider }
    }

    /// One directory per known provider, in check order
    pub fn for_all_providers(pool: &PgPool) -> Vec<Self> {
        IntegrationProvider::ALL
            .into_iter()
            .map(|provider| Self::new(pool.clone(), provider))
            .collect()
    }
}

#[async_trait]
impl IntegrationDirectory for PgIntegrationDirectory {
    fn provider(&self) -> IntegrationProvider {
        self.provider
    }

    async fn list_all(&self, tenant_id: i64) -> Result<Vec<Integration>> {
        Ok(Integration::list_for_tenant(&self.pool, tenant_id, self.provider).await?)
    }
}
