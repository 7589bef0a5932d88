mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::board::{self, BoardCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::options::{BoardOptions, Grouping, Sorting};
use crate::error::AppResult;
use crate::infra::terminal::OutputFormat;

#[derive(Parser)]
#[command(name = "kanban", author, version, about = "Kanban board for a remote ticket feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch tickets and print them grouped and sorted.
    Board(BoardArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Ticket attribute to group by (status, user, priority).
    #[arg(short, long, default_value = "status")]
    group: Grouping,
    /// Order of tickets inside each group (priority, title).
    #[arg(short, long, default_value = "priority")]
    sort: Sorting,
    /// Ticket feed URL or path to a JSON file; overrides the configured source.
    #[arg(long)]
    source: Option<String>,
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Keep reading grouping/sorting commands from stdin after the first render.
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => {
            config_cmd::run(args.command)?;
            Ok(())
        }
        Commands::Board(args) => run_board(args).await,
    }
}

async fn run_board(args: BoardArgs) -> AppResult<()> {
    let config = AppConfig::load(args.source)?;
    let ticket_source = infra::ticket_source(&config.source);
    let context = AppContext::new(config, ticket_source);

    board::run(
        &context,
        BoardCommandArgs {
            options: BoardOptions::new(args.group, args.sort),
            format: args.format,
            interactive: args.interactive,
        },
    )
    .await
}
