//! # Onboarding Status Service
//!
//! Evaluates the onboarding checklist for a tenant. Each entry's `done` flag is
//! recomputed from the database on every call:
//!
//! - **Install**: any session recorded under the tenant's projects
//! - **Identify Users**: any active project with an identified session or a
//!   populated metadata slot
//! - **Invite Team Members**: more than one member
//! - **Integrations**: any Datadog, Sentry or Stackdriver integration
//!
//! The composite [`OnboardingStatusService::get_checklist`] only runs the
//! identify-users probe once sessions are known to exist; the standalone
//! [`OnboardingStatusService::get_identify_users_state`] always runs it.

use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::constants::OnboardingTask;
use crate::database::existence_queries::{any_identified_user, any_recorded_session};
use crate::directories::{
    IntegrationDirectory, MemberDirectory, PgIntegrationDirectory, PgMemberDirectory,
    PgProjectDirectory, ProjectDirectory,
};
use crate::error::Result;
use crate::logging::log_evaluation_error;
use crate::models::ChecklistEntry;

/// Session-derived flags evaluated together on one connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SessionFlags {
    recorded: bool,
    identified: bool,
}

#[derive(Clone)]
pub struct OnboardingStatusService {
    db_pool: PgPool,
    projects: Arc<dyn ProjectDirectory>,
    members: Arc<dyn MemberDirectory>,
    integrations: Vec<Arc<dyn IntegrationDirectory>>,
}

impl std::fmt::Debug for OnboardingStatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingStatusService")
            .field("pool_size", &self.db_pool.size())
            .field(
                "integration_providers",
                &self
                    .integrations
                    .iter()
                    .map(|d| d.provider())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl OnboardingStatusService {
    pub fn new(
        db_pool: PgPool,
        projects: Arc<dyn ProjectDirectory>,
        members: Arc<dyn MemberDirectory>,
        integrations: Vec<Arc<dyn IntegrationDirectory>>,
    ) -> Self {
        Self {
            db_pool,
            projects,
            members,
            integrations,
        }
    }

    /// Service wired to the Postgres-backed directories
    pub fn from_pool(db_pool: PgPool) -> Self {
        let integrations = PgIntegrationDirectory::for_all_providers(&db_pool)
            .into_iter()
            .map(|d| Arc::new(d) as Arc<dyn IntegrationDirectory>)
            .collect();

        Self::new(
            db_pool.clone(),
            Arc::new(PgProjectDirectory::new(db_pool.clone())),
            Arc::new(PgMemberDirectory::new(db_pool)),
            integrations,
        )
    }

    /// Full checklist in the order Install, Identify Users, Invite Team Members,
    /// Integrations
    #[instrument(skip(self))]
    pub async fn get_checklist(&self, tenant_id: i64) -> Result<Vec<ChecklistEntry>> {
        let result = tokio::try_join!(
            self.gated_session_flags(tenant_id),
            self.has_invited_teammates(tenant_id),
            self.has_integrations(tenant_id),
        );

        let (sessions, invited, integrated) = result.inspect_err(|e| {
            log_evaluation_error("get_checklist", tenant_id, &e.to_string());
        })?;

        let checklist: Vec<ChecklistEntry> = OnboardingTask::ALL
            .iter()
            .map(|task| {
                let done = match task {
                    OnboardingTask::Install => sessions.recorded,
                    OnboardingTask::IdentifyUsers => sessions.identified,
                    OnboardingTask::ManageUsers => invited,
                    OnboardingTask::Integrations => integrated,
                };
                ChecklistEntry::new(*task, done)
            })
            .collect();

        debug!(
            tenant_id = tenant_id,
            completed = checklist.iter().filter(|e| e.done).count(),
            "Onboarding checklist evaluated"
        );

        Ok(checklist)
    }

    /// Install task alone, for cheap polling while a tracker is being set up
    #[instrument(skip(self))]
    pub async fn get_install_state(&self, tenant_id: i64) -> Result<ChecklistEntry> {
        let done = self.has_recorded_sessions(tenant_id).await?;
        Ok(self.entry(OnboardingTask::Install, done))
    }

    /// Identify-users task alone; not gated on recorded sessions
    #[instrument(skip(self))]
    pub async fn get_identify_users_state(&self, tenant_id: i64) -> Result<ChecklistEntry> {
        let done = self.has_identified_users(tenant_id).await?;
        Ok(self.entry(OnboardingTask::IdentifyUsers, done))
    }

    #[instrument(skip(self))]
    pub async fn get_manage_users_state(&self, tenant_id: i64) -> Result<ChecklistEntry> {
        let done = self.has_invited_teammates(tenant_id).await?;
        Ok(self.entry(OnboardingTask::ManageUsers, done))
    }

    #[instrument(skip(self))]
    pub async fn get_integrations_state(&self, tenant_id: i64) -> Result<ChecklistEntry> {
        let done = self.has_integrations(tenant_id).await?;
        Ok(self.entry(OnboardingTask::Integrations, done))
    }

    /// Evaluate a single task by kind
    pub async fn get_task_state(
        &self,
        tenant_id: i64,
        task: OnboardingTask,
    ) -> Result<ChecklistEntry> {
        match task {
            OnboardingTask::Install => self.get_install_state(tenant_id).await,
            OnboardingTask::IdentifyUsers => self.get_identify_users_state(tenant_id).await,
            OnboardingTask::ManageUsers => self.get_manage_users_state(tenant_id).await,
            OnboardingTask::Integrations => self.get_integrations_state(tenant_id).await,
        }
    }

    /// Any session recorded under the tenant's projects
    ///
    /// A tenant without projects is `false` and issues no session query.
    pub async fn has_recorded_sessions(&self, tenant_id: i64) -> Result<bool> {
        let project_ids = self.projects.list_project_ids(tenant_id).await?;
        if project_ids.is_empty() {
            return Ok(false);
        }

        let mut conn = self.db_pool.acquire().await?;
        Ok(any_recorded_session(&mut conn, &project_ids).await?)
    }

    /// Any active project with an identified session or populated metadata
    pub async fn has_identified_users(&self, tenant_id: i64) -> Result<bool> {
        let mut conn = self.db_pool.acquire().await?;
        Ok(any_identified_user(&mut conn, tenant_id).await?)
    }

    /// More than one member, i.e. someone besides the account creator
    pub async fn has_invited_teammates(&self, tenant_id: i64) -> Result<bool> {
        let members = self.members.list_members(tenant_id).await?;
        Ok(members.len() > 1)
    }

    /// Any provider reports at least one integration; stops at the first hit
    pub async fn has_integrations(&self, tenant_id: i64) -> Result<bool> {
        for directory in &self.integrations {
            if !directory.list_all(tenant_id).await?.is_empty() {
                debug!(
                    tenant_id = tenant_id,
                    provider = %directory.provider(),
                    "Integration found"
                );
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Session and identify flags for the composite checklist. The identify
    /// probe only runs when sessions exist, on the same pooled connection.
    async fn gated_session_flags(&self, tenant_id: i64) -> Result<SessionFlags> {
        let project_ids = self.projects.list_project_ids(tenant_id).await?;
        if project_ids.is_empty() {
            return Ok(SessionFlags::default());
        }

        let mut conn = self.db_pool.acquire().await?;
        let recorded = any_recorded_session(&mut conn, &project_ids).await?;
        let identified = if recorded {
            any_identified_user(&mut conn, tenant_id).await?
        } else {
            false
        };

        Ok(SessionFlags {
            recorded,
            identified,
        })
    }

    fn entry(&self, task: OnboardingTask, done: bool) -> ChecklistEntry {
        debug!(task = %task, done = done, "Onboarding task evaluated");
        ChecklistEntry::new(task, done)
    }
}
