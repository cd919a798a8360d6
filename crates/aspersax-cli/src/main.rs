use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use aspersax_core::AppConfig;
use aspersax_core::permission::Role;
use aspersax_infrastructure::ConfigService;

mod commands;

#[derive(Parser)]
#[command(name = "aspersax")]
#[command(about = "Aspersax - weed-control robot fleet console", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the persisted collections
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard aggregates
    Stats,
    /// Print every record of one collection
    List {
        #[arg(value_enum)]
        kind: EntityKind,
    },
    /// Print per-day activity (defaults to the last 7 days)
    Activity {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Build the productivity, status, trend and cost report
    Report {
        #[arg(long)]
        robot: Option<u32>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show the capabilities of a role or of the configured user profile
    Permissions {
        #[arg(long, value_enum, conflicts_with = "profile")]
        role: Option<RoleArg>,
        #[arg(long, conflicts_with = "profile")]
        superuser: bool,
        /// JSON profile file (defaults to the configured profile)
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Replace all stored data with the seed dataset
    Reset {
        /// Start from empty collections instead of the demo fleet
        #[arg(long)]
        empty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EntityKind {
    Robots,
    Tanks,
    Jornadas,
    Malezas,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    Viewer,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::Viewer => Role::Viewer,
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let service = match path {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location()?,
    };
    Ok(service.load()?)
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    init_tracing(&config.log_filter);

    match cli.command {
        Commands::Stats => commands::fleet::stats(&config)?,
        Commands::List { kind } => commands::fleet::list(&config, kind)?,
        Commands::Activity { from, to } => commands::fleet::activity(&config, from, to)?,
        Commands::Report { robot, from, to } => commands::fleet::report(&config, robot, from, to)?,
        Commands::Permissions {
            role,
            superuser,
            profile,
        } => {
            commands::permissions::show(&config, role.map(Role::from), superuser, profile).await?
        }
        Commands::Reset { empty } => commands::fleet::reset(&config, empty)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_report_arguments_parse() {
        let cli = Cli::try_parse_from([
            "aspersax", "report", "--robot", "4", "--from", "2025-08-20", "--to", "2025-08-27",
        ])
        .unwrap();

        match cli.command {
            Commands::Report { robot, from, to } => {
                assert_eq!(robot, Some(4));
                assert_eq!(from, NaiveDate::from_ymd_opt(2025, 8, 20));
                assert_eq!(to, NaiveDate::from_ymd_opt(2025, 8, 27));
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_role_conflicts_with_profile() {
        let result = Cli::try_parse_from([
            "aspersax", "permissions", "--role", "admin", "--profile", "p.json",
        ]);
        assert!(result.is_err());
    }
}
