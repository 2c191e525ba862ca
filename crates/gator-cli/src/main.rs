//! CLI frontend for the GATOR combat resolution engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::args::{ClusterArgs, ContextArgs, parse_facing};
use gator_mechanics::Facing;

#[derive(Parser)]
#[command(
    name = "gator",
    about = "G.A.T.O.R. — target numbers and hit resolution for tabletop mech combat",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Engine config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the target number for an attack
    Tn {
        #[command(flatten)]
        context: ContextArgs,
    },

    /// Compute the target number and roll to hit
    Attack {
        #[command(flatten)]
        context: ContextArgs,

        /// On a hit, roll location from this arc (front, rear)
        #[arg(short, long, value_parser = parse_facing)]
        facing: Option<Facing>,

        /// On a hit, also roll a critical check
        #[arg(long)]
        crit: bool,
    },

    /// Roll a hit location
    Location {
        /// Attack arc (front, rear)
        #[arg(short, long, default_value = "front", value_parser = parse_facing)]
        facing: Facing,
    },

    /// Roll a critical check
    Crit,

    /// Roll cluster hits for a missile launcher
    Cluster {
        #[command(flatten)]
        cluster: ClusterArgs,
    },

    /// Roll a dice expression such as 2d6+1
    Roll {
        /// Dice expression
        #[arg(default_value = "2d6")]
        expr: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gator_mechanics=debug,gator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::Session::new(cli.seed, cli.config.as_deref(), cli.json).and_then(
        |mut session| match cli.command {
            Commands::Tn { context } => commands::tn::run(&session, &context),
            Commands::Attack {
                context,
                facing,
                crit,
            } => commands::attack::run(&mut session, &context, facing, crit),
            Commands::Location { facing } => commands::location::run(&mut session, facing),
            Commands::Crit => commands::crit::run(&mut session),
            Commands::Cluster { cluster } => commands::cluster::run(&mut session, &cluster),
            Commands::Roll { expr } => commands::roll::run(&mut session, &expr),
        },
    );

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
