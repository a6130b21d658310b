use std::path::PathBuf;
use std::pin::pin;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use payroll_client::auth::JwtService;
use payroll_client::documents;
use payroll_client::ops::audit::{recent_activity, RecentActivity};
use payroll_client::ops::payroll_dates::{get_payroll_dates, GetPayrollDates};
use payroll_client::ops::work_schedule::{get_team_workload_optimized, GetTeamWorkloadOptimized};
use payroll_client::schema::scalars::Date;
use payroll_client::schema::UserRole;
use payroll_client::validation::Schema;
use payroll_client::workload::TeamWorkload;
use payroll_client::{HasuraClient, ServiceTokenConfig, SubscriptionClient};

#[derive(Debug, Parser)]
#[command(name = "payroll-gql", version)]
#[command(arg_required_else_help = true)]
/// Typed client for the payroll Hasura API
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect the bundled operation documents
    Documents {
        #[command(subcommand)]
        command: DocumentsCommand,
    },
    /// Capacity and payroll load per consultant
    Workload {
        /// Roles to include. Defaults to consultants and managers.
        #[arg(long = "role")]
        roles: Vec<UserRole>,
    },
    /// Processing and EFT dates of one payroll
    PayrollDates {
        #[arg(long)]
        payroll_id: Uuid,
        #[arg(long)]
        from: Option<Date>,
        #[arg(long)]
        to: Option<Date>,
    },
    /// Follow the audit log as it changes
    Activity {
        #[arg(long, default_value_t = 20)]
        limit: i32,
    },
    /// Mint a service token from HASURA_JWT_* settings
    Token {
        #[arg(long, env = "HASURA_JWT_USER_ID")]
        user_id: Uuid,
        #[arg(long)]
        role: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum DocumentsCommand {
    /// Name and kind of every document
    List,
    /// Print one document
    Show { name: String },
    /// Validate every document against a schema SDL
    Check {
        /// Schema to check against. Defaults to the bundled snapshot.
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    match Args::parse().command {
        Command::Documents { command } => run_documents(command),
        Command::Workload { roles } => run_workload(roles).await,
        Command::PayrollDates {
            payroll_id,
            from,
            to,
        } => run_payroll_dates(payroll_id, from, to).await,
        Command::Activity { limit } => run_activity(limit).await,
        Command::Token { user_id, role } => {
            let jwt = JwtService::new(&ServiceTokenConfig::from_env()?);
            println!("{}", jwt.create_token(user_id, role.as_deref())?);
            Ok(())
        }
    }
}

fn run_documents(command: DocumentsCommand) -> anyhow::Result<()> {
    match command {
        DocumentsCommand::List => {
            for doc in documents::registry() {
                println!("{:<13} {}", doc.kind.as_str(), doc.name);
            }
        }
        DocumentsCommand::Show { name } => {
            let doc = documents::find(&name).ok_or_else(|| anyhow!("no document named {name}"))?;
            print!("{}", doc.document);
        }
        DocumentsCommand::Check { schema } => {
            let schema = match schema {
                Some(path) => {
                    let sdl = std::fs::read_to_string(&path)
                        .with_context(|| format!("error loading schema {}", path.display()))?;
                    Schema::parse(&sdl)?
                }
                None => Schema::bundled()?,
            };

            let violations = schema.validate_all(documents::registry());
            for violation in &violations {
                println!("{violation}");
            }
            if !violations.is_empty() {
                return Err(anyhow!("{} schema violations", violations.len()));
            }
            tracing::info!("{} documents match the schema", documents::registry().len());
        }
    }
    Ok(())
}

async fn run_workload(roles: Vec<UserRole>) -> anyhow::Result<()> {
    let client = HasuraClient::from_env()?;
    let mut variables = get_team_workload_optimized::Variables::default();
    if !roles.is_empty() {
        variables.roles = roles;
    }

    let data = client.execute::<GetTeamWorkloadOptimized>(variables).await?;
    let workload = TeamWorkload::new(&data);

    for member in workload.busiest() {
        let load = member
            .employees_per_hour
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<28} {:>6}h {:>3} primary {:>3} backup {:>5} employees {:>6}/h",
            member.name,
            member.capacity_hours,
            member.primary_payrolls,
            member.backup_payrolls,
            member.employees,
            load
        );
    }
    println!(
        "{} members, {}h capacity, {} primary payrolls",
        workload.members.len(),
        workload.total_capacity_hours,
        workload.total_primary_payrolls
    );
    Ok(())
}

async fn run_payroll_dates(payroll_id: Uuid, from: Option<Date>, to: Option<Date>) -> anyhow::Result<()> {
    let client = HasuraClient::from_env()?;
    let data = client
        .execute::<GetPayrollDates>(get_payroll_dates::Variables::for_payroll(payroll_id, from, to))
        .await?;

    for date in &data.payroll_dates {
        let marker = if date.is_adjusted() { " (adjusted)" } else { "" };
        println!(
            "processing {}  eft {}{marker}",
            date.processing_date, date.adjusted_eft_date
        );
    }
    Ok(())
}

async fn run_activity(limit: i32) -> anyhow::Result<()> {
    let client = SubscriptionClient::from_env()?;
    let stream = client
        .subscribe::<RecentActivity>(recent_activity::Variables { limit })
        .await?;
    let mut stream = pin!(stream);

    while let Some(batch) = stream.next().await {
        let batch = batch?;
        println!("{}", serde_json::to_string_pretty(&batch.audit_audit_log)?);
    }
    tracing::info!("Subscription completed");
    Ok(())
}
