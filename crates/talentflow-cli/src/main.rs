use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use talentflow_cli::commands::{self, Repos};
use talentflow_cli::config::{self, LogFormat};

#[derive(Parser)]
#[command(name = "talentflow", about = "Build, take and review candidate assessments")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a demo job, assessment and application
    Seed(commands::seed::SeedArgs),
    /// List assessments
    Assessments(commands::assessments::AssessmentsArgs),
    /// Assessments a candidate can take
    Catalog(commands::catalog::CatalogArgs),
    /// Take an assessment with answers from a file
    Take(commands::take::TakeArgs),
    /// Results for an assessment
    Results(commands::results::ResultsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = config::resolve_path(cli.config.as_deref())?;
    let config = config::load(&config_path)?;
    init_tracing(cli.verbose, config.log_format);
    tracing::debug!(
        path = %config_path.display(),
        data_dir = %config.data_dir.display(),
        "config loaded"
    );

    let repos = Repos::open(&config.data_dir);
    match cli.command {
        Commands::Seed(args) => commands::seed::run(&repos, args).await,
        Commands::Assessments(args) => commands::assessments::run(&repos, args).await,
        Commands::Catalog(args) => commands::catalog::run(&repos, args).await,
        Commands::Take(args) => commands::take::run(&repos, args).await,
        Commands::Results(args) => commands::results::run(&repos, args).await,
        Commands::Config(args) => commands::config::run(args, &config_path, &config),
    }
}

fn init_tracing(verbose: bool, format: LogFormat) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
