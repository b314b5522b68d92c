#![forbid(unsafe_code)]
//! reach: enumerate simple paths through a small weighted digraph and try
//! to out-rank its most-reachable node with a synthetic hub.

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "reach: simple-path reachability explorer",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Print the demonstration graph, one edge per line",
        after_help = "EXAMPLES:\n    reach show\n    reach show --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "Enumerate every simple path between two nodes",
        long_about = "Enumerate every simple path between two nodes, heaviest first.",
        after_help = "EXAMPLES:\n    reach paths 0 8\n    reach paths 0 8 --max-depth 4\n    reach paths 0 8 --json"
    )]
    Paths(cmd::paths::PathsArgs),

    #[command(
        about = "Rank every node by simple-path count from a source",
        after_help = "EXAMPLES:\n    reach rank\n    reach rank 4 --json"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(
        about = "Insert the hub node and report the outcome",
        long_about = "Insert the synthetic hub node, wire eligible donors into it, and report success or the concrete failure reason.",
        after_help = "EXAMPLES:\n    reach augment\n    reach augment --json"
    )]
    Augment(cmd::augment::AugmentArgs),

    #[command(
        about = "Run the full demonstration: rank, enumerate, augment",
        after_help = "EXAMPLES:\n    reach demo\n    reach demo --json"
    )]
    Demo(cmd::demo::DemoArgs),
}

/// Configure tracing from `REACH_LOG` (falls back to warnings only).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("REACH_LOG").unwrap_or_else(|_| EnvFilter::new("reach=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mode = cli.output_mode();
    tracing::debug!(?mode, "output mode resolved");

    match cli.command {
        Commands::Show(args) => cmd::show::run_show(&args, mode),
        Commands::Paths(args) => cmd::paths::run_paths(&args, mode),
        Commands::Rank(args) => cmd::rank::run_rank(&args, mode),
        Commands::Augment(args) => cmd::augment::run_augment(&args, mode),
        Commands::Demo(args) => cmd::demo::run_demo(&args, mode),
    }
}
