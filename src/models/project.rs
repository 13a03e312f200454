use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A tracked application or site under a tenant
/// Maps to the `projects` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub project_id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Ids of the tenant's projects that have not been soft-deleted
    pub async fn list_active_ids(pool: &PgPool, tenant_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT p.project_id
            FROM projects AS p
            WHERE p.tenant_id = $1
              AND p.deleted_at IS NULL
            ORDER BY p.project_id
            "#,
        )
        .bind(tenant_id)
        .fetch_all(pool)
        .await
    }

    /// Active projects of a tenant
    pub async fn list_active(pool: &PgPool, tenant_id: i64) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT project_id, tenant_id, name, deleted_at
            FROM projects
            WHERE tenant_id = $1
              AND deleted_at IS NULL
            ORDER BY project_id
            "#,
        )
        .bind(tenant_id)
        .fetch_all(pool)
        .await
    }
}
