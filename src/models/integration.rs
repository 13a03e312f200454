use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::constants::IntegrationProvider;

/// A configured log or error-tracking integration on a project
/// Maps to the `integrations` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Integration {
    pub project_id: i64,
    pub provider: String,
    pub options: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Integration {
    /// Integrations of one provider across the tenant's active projects
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: i64,
        provider: IntegrationProvider,
    ) -> Result<Vec<Integration>, sqlx::Error> {
        sqlx::query_as::<_, Integration>(
            r#"
            SELECT i.project_id, i.provider, i.options, i.created_at
            FROM integrations AS i
                     INNER JOIN projects AS p USING (project_id)
            WHERE p.tenant_id = $1
              AND p.deleted_at IS NULL
              AND i.provider = $2
            ORDER BY i.project_id
            "#,
        )
        .bind(tenant_id)
        .bind(provider.as_str())
        .fetch_all(pool)
        .await
    }

    pub fn provider_kind(&self) -> Option<IntegrationProvider> {
        self.provider.parse().ok()
    }
}
