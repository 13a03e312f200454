//! # Onboarding Checklist
//!
//! Prints a tenant's onboarding checklist, or a single task's state, as JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use onboarding_status::config::OnboardingConfig;
use onboarding_status::database::DatabaseConnection;
use onboarding_status::logging::init_structured_logging;
use onboarding_status::{OnboardingStatusService, OnboardingTask};

#[derive(Parser)]
#[command(name = "onboarding-checklist")]
#[command(about = "Evaluate a tenant's onboarding checklist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Tenant to evaluate
    #[arg(short, long, env = "ONBOARDING_TENANT_ID")]
    tenant_id: i64,

    /// Evaluate a single task instead of the full checklist
    #[arg(long, value_enum)]
    task: Option<TaskArg>,

    /// Configuration directory (default: config)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TaskArg {
    Install,
    IdentifyUsers,
    ManageUsers,
    Integrations,
}

impl From<TaskArg> for OnboardingTask {
    fn from(arg: TaskArg) -> Self {
        match arg {
            TaskArg::Install => OnboardingTask::Install,
            TaskArg::IdentifyUsers => OnboardingTask::IdentifyUsers,
            TaskArg::ManageUsers => OnboardingTask::ManageUsers,
            TaskArg::Integrations => OnboardingTask::Integrations,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = OnboardingConfig::load_from_directory(cli.config_dir.clone())
        .context("failed to load configuration")?;
    init_structured_logging(&config.environment, &config.logging);

    let db = DatabaseConnection::new(&config.database)
        .await
        .context("failed to connect to database")?;
    let service = OnboardingStatusService::from_pool(db.pool().clone());

    info!(tenant_id = cli.tenant_id, task = ?cli.task, "Evaluating onboarding state");

    let output = match cli.task {
        Some(task) => {
            let entry = service
                .get_task_state(cli.tenant_id, task.into())
                .await?;
            serde_json::to_value(entry)?
        }
        None => serde_json::to_value(service.get_checklist(cli.tenant_id).await?)?,
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{output}");
    }

    db.close().await;
    Ok(())
}
