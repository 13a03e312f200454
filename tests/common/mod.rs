//! Test data factories for the onboarding read model.
//!
//! Every helper inserts rows through plain SQL against the pool that
//! `#[sqlx::test]` hands each test, so data never leaks between tests.

#![allow(dead_code)]

use sqlx::PgPool;

pub async fn create_tenant(pool: &PgPool, name: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar("INSERT INTO tenants (name) VALUES ($1) RETURNING tenant_id")
        .bind(name)
        .fetch_one(pool)
        .await
}

/// Project builder; defaults to an active project with no metadata
#[derive(Debug, Clone)]
pub struct ProjectFactory {
    tenant_id: i64,
    name: String,
    deleted: bool,
    metadata_slot: Option<(usize, String)>,
}

impl ProjectFactory {
    pub fn for_tenant(tenant_id: i64) -> Self {
        Self {
            tenant_id,
            name: "web".to_string(),
            deleted: false,
            metadata_slot: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Populate one of `metadata_1` .. `metadata_10`
    pub fn with_metadata(mut self, slot: usize, key: &str) -> Self {
        assert!((1..=10).contains(&slot), "metadata slot out of range: {slot}");
        self.metadata_slot = Some((slot, key.to_string()));
        self
    }

    pub async fn create(self, pool: &PgPool) -> sqlx::Result<i64> {
        let project_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (tenant_id, name, deleted_at)
            VALUES ($1, $2, CASE WHEN $3 THEN now() ELSE NULL END)
            RETURNING project_id
            "#,
        )
        .bind(self.tenant_id)
        .bind(&self.name)
        .bind(self.deleted)
        .fetch_one(pool)
        .await?;

        if let Some((slot, key)) = self.metadata_slot {
            let sql = format!("UPDATE projects SET metadata_{slot} = $2 WHERE project_id = $1");
            sqlx::query(&sql)
                .bind(project_id)
                .bind(key)
                .execute(pool)
                .await?;
        }

        Ok(project_id)
    }
}

pub async fn record_session(
    pool: &PgPool,
    project_id: i64,
    user_id: Option<&str>,
) -> sqlx::Result<i64> {
    sqlx::query_scalar(
        "INSERT INTO sessions (project_id, user_id) VALUES ($1, $2) RETURNING session_id",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn add_member(pool: &PgPool, tenant_id: i64, email: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar("INSERT INTO users (tenant_id, email) VALUES ($1, $2) RETURNING user_id")
        .bind(tenant_id)
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn remove_member(pool: &PgPool, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("UPDATE users SET deleted_at = now() WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn add_integration(pool: &PgPool, project_id: i64, provider: &str) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO integrations (project_id, provider, options) VALUES ($1, $2, $3)")
        .bind(project_id)
        .bind(provider)
        .bind(serde_json::json!({ "api_key": "test" }))
        .execute(pool)
        .await?;
    Ok(())
}
