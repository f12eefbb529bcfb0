use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "numlab-prefs")]
#[command(about = "Preferences dialog and settings maintenance for NumLab")]
#[command(version)]
struct Cli {
    /// Path to the settings file (defaults to ~/.numlab/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the preferences window
    Gui,

    /// Initialize a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective settings as TOML
    Show,

    /// Check whether a compiler toolchain lives at the given path
    CheckToolchain {
        /// Toolchain location to inspect
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::Show) => {
            cli::show::show_command(cli.config)?;
        }
        Some(Commands::CheckToolchain { path }) => {
            cli::toolchain::check_toolchain_command(&path)?;
        }
        Some(Commands::Gui) | None => {
            numlab_prefs::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
