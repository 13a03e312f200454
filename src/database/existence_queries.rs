//! # Existence Queries
//!
//! Read-only `EXISTS` probes used by the onboarding checks. Every query that
//! is scoped to a tenant receives the tenant id as an explicit bind parameter
//! produced by [`tenant_scope`]; no query relies on a shared predicate fragment.
//!
//! Both probes run on a caller-supplied connection so a caller can issue several
//! probes on one pooled connection and release it when the guard drops.

use sqlx::PgConnection;
use std::sync::OnceLock;

use crate::constants::METADATA_SLOT_COUNT;

/// Any session recorded under the given projects
pub const RECORDED_SESSIONS_SQL: &str = r#"
SELECT EXISTS (SELECT 1
               FROM sessions AS s
               WHERE s.project_id = ANY($1)) AS exists
"#;

static IDENTIFIED_USERS_SQL: OnceLock<String> = OnceLock::new();

/// Predicate restricting `alias` rows to the tenant bound at `$param`
pub fn tenant_scope(alias: &str, param: usize) -> String {
    format!("{alias}.tenant_id = ${param}")
}

/// `alias.metadata_1 IS NOT NULL OR ... OR alias.metadata_10 IS NOT NULL`
pub fn metadata_populated(alias: &str) -> String {
    (1..=METADATA_SLOT_COUNT)
        .map(|slot| format!("{alias}.metadata_{slot} IS NOT NULL"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Any active project of the tenant (`$1`) with an identified session or a
/// populated metadata slot.
///
/// The lateral lookup stops at the first identified session per project, so
/// the whole check is a single round trip regardless of project count.
pub fn identified_users_sql() -> &'static str {
    IDENTIFIED_USERS_SQL.get_or_init(|| {
        format!(
            r#"
SELECT EXISTS (SELECT 1
               FROM projects AS p
                        LEFT JOIN LATERAL (SELECT s.user_id
                                           FROM sessions AS s
                                           WHERE s.project_id = p.project_id
                                             AND s.user_id IS NOT NULL
                                           LIMIT 1) AS identified ON TRUE
               WHERE {tenant}
                 AND p.deleted_at IS NULL
                 AND (identified.user_id IS NOT NULL OR {metadata})) AS exists
"#,
            tenant = tenant_scope("p", 1),
            metadata = metadata_populated("p"),
        )
    })
}

/// True when at least one session exists under `project_ids`
///
/// Callers skip this for an empty id list.
pub async fn any_recorded_session(
    conn: &mut PgConnection,
    project_ids: &[i64],
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(RECORDED_SESSIONS_SQL)
        .bind(project_ids)
        .fetch_one(conn)
        .await
}

/// True when the tenant has identified users on any active project
pub async fn any_identified_user(
    conn: &mut PgConnection,
    tenant_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(identified_users_sql())
        .bind(tenant_id)
        .fetch_one(conn)
        .await
}
