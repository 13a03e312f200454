use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A user belonging to a tenant
/// Maps to the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub user_id: i64,
    pub tenant_id: i64,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Members of a tenant, excluding deleted users
    pub async fn list_for_tenant(pool: &PgPool, tenant_id: i64) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT user_id, tenant_id, email, role, created_at
            FROM users
            WHERE tenant_id = $1
              AND deleted_at IS NULL
            ORDER BY user_id
            "#,
        )
        .bind(tenant_id)
        .fetch_all(pool)
        .await
    }
}
