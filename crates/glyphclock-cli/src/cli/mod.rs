//! CLI entry and dispatch.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use glyphclock_core::config::{self, Config};
use glyphclock_core::logging;
use glyphclock_core::{DisplayOptions, Theme, TimeFormat};
use tracing_appender::non_blocking::WorkerGuard;

mod commands;

#[derive(Parser)]
#[command(name = "glyphclock")]
#[command(version)]
#[command(about = "Big ASCII-art digital clock with world times")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    display: DisplayArgs,
}

/// Startup display overrides; anything not given comes from the config file.
#[derive(clap::Args, Debug, Clone, Default)]
struct DisplayArgs {
    /// Initial theme (neon, classic, matrix, cyberpunk)
    #[arg(long, global = true, value_name = "THEME", env = "GLYPHCLOCK_THEME")]
    theme: Option<Theme>,

    /// Start in 12-hour format
    #[arg(long = "twelve-hour", global = true)]
    twelve_hour: bool,

    /// Start with seconds hidden
    #[arg(long = "no-seconds", global = true)]
    no_seconds: bool,
}

impl DisplayArgs {
    fn apply(&self, mut options: DisplayOptions) -> DisplayOptions {
        if let Some(theme) = self.theme {
            options.theme = theme;
        }
        if self.twelve_hour {
            options.time_format = TimeFormat::TwelveHour;
        }
        if self.no_seconds {
            options.show_seconds = false;
        }
        options
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print a single frame to stdout and exit
    Once {
        /// Render at this instant instead of now (RFC 3339, e.g. 2026-10-19T09:41:07+01:00)
        #[arg(long, value_name = "TIME", value_parser = parse_instant)]
        at: Option<DateTime<FixedOffset>>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid RFC 3339 time '{s}': {e}"))
}

pub fn run() -> Result<()> {
    let Cli { command, display } = Cli::parse();

    match command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Once { at }) => {
            let (options, _log_guard) = startup(&display)?;
            commands::once::run(options, at)
        }
        None => {
            let (options, _log_guard) = startup(&display)?;
            commands::clock::run(options)
        }
    }
}

/// Loads config, installs file logging and resolves the initial options.
///
/// The returned guard flushes the log on drop.
fn startup(display: &DisplayArgs) -> Result<(DisplayOptions, WorkerGuard)> {
    let config = Config::load().context("load config")?;
    let guard = logging::init_file_logging(&config::paths::log_dir(), &config.log_level)
        .context("init logging")?;
    Ok((display.apply(config.display_options()), guard))
}
