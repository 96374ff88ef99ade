use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;
mod script;
mod surface;

#[derive(Parser)]
#[command(name = "cargo-swiper")]
#[command(bin_name = "cargo")]
#[command(version, about = "CLI tool for swiper-ui", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swiper CLI commands
    #[command(name = "swiper")]
    Swiper(SwiperArgs),
}

#[derive(Parser)]
struct SwiperArgs {
    #[command(subcommand)]
    command: SwiperCommands,
}

#[derive(Subcommand)]
enum SwiperCommands {
    /// Replay a gesture script against a paginator
    Replay {
        /// Script with one step per line
        script: PathBuf,
        /// Configuration file (defaults to ./swiper.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Deliver transition-complete notifications automatically
        #[arg(long)]
        auto_settle: bool,
        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Validate a configuration file and print the effective options
    Check {
        /// Configuration file (defaults to ./swiper.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let Cli { command } = Cli::parse();

    match command {
        Commands::Swiper(args) => match args.command {
            SwiperCommands::Replay {
                script,
                config,
                auto_settle,
                verbose,
            } => {
                init_tracing(verbose);
                commands::replay::execute(&script, config.as_deref(), auto_settle)?;
            }
            SwiperCommands::Check { config } => {
                init_tracing(false);
                commands::check::execute(config.as_deref())?;
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,swiper_ui=trace,cargo_swiper=debug"
    } else {
        "error,swiper_ui=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
