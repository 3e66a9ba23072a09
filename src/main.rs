// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Snap channels CLI - parse, group and order snap channel names

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use snap_channels::commands::{self, sort::OutputMode, ChannelInput};
use snap_channels::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snap-channels")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "SNAP_CHANNELS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output (any NO_COLOR value other than 0/false/no/off)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Channel sources shared by the sorting commands
#[derive(Args)]
struct InputArgs {
    /// Channels (risk, track/risk, risk/branch or track/risk/branch)
    channels: Vec<String>,

    /// Read channels from a file instead (one or more per line)
    #[arg(short, long, conflicts_with = "channels")]
    file: Option<PathBuf>,

    /// Track to assume for shorthand channels and list first
    #[arg(short = 't', long)]
    default_track: Option<String>,
}

impl InputArgs {
    fn split(self) -> (ChannelInput, Option<String>) {
        (
            ChannelInput {
                channels: self.channels,
                file: self.file,
            },
            self.default_track,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sort channels: default track first, risks by stability, branches alphanumerically
    Sort {
        #[command(flatten)]
        input: InputArgs,

        /// Output mode (list, tree, json); defaults to the configured one
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show channels grouped by track, risk and branch
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Break channels into track, risk and branch
    Parse {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Build a full channel name from its parts
    Format {
        /// Track name
        #[arg(long, default_value = snap_channels::types::DEFAULT_TRACK)]
        track: String,

        /// Risk (stable, candidate, beta, edge)
        #[arg(long)]
        risk: String,

        /// Branch name
        #[arg(long)]
        branch: Option<String>,
    },

    /// Export the sorted channels to various formats
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (dot, json, toml)
        #[arg(long, default_value = "json")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (omit to list all)
        key: Option<String>,

        /// Value to set (omit to get)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let settings = config::load(Some(&config_path))?;

    // Initialize logging; RUST_LOG wins over flags and config
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => settings.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let color = settings.color && !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Sort { input, output } => {
            let (input, default_track) = input.split();
            let options = commands::sort_options(default_track, &settings);
            let mode = if cli.json {
                OutputMode::Json
            } else {
                let name = output.as_deref().unwrap_or(&settings.output);
                OutputMode::from_name(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown output: {}. Valid: list, tree, json", name))?
            };
            commands::sort::run(&input, &options, mode, color)
        }
        Commands::Tree { input } => {
            let (input, default_track) = input.split();
            let options = commands::sort_options(default_track, &settings);
            commands::tree::run(&input, &options, cli.json, color)
        }
        Commands::Parse { input } => {
            let (input, default_track) = input.split();
            let options = commands::sort_options(default_track, &settings);
            commands::parse::run(&input, &options, cli.json)
        }
        Commands::Format { track, risk, branch } => {
            commands::format::run(&track, &risk, branch.as_deref())
        }
        Commands::Export { input, format, output } => {
            let (input, default_track) = input.split();
            let options = commands::sort_options(default_track, &settings);
            commands::export::run(&input, &options, &format, output)
        }
        Commands::Config { key, value } => {
            commands::config::run(&settings, &config_path, key.as_deref(), value.as_deref())
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
