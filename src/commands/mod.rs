// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod format;
pub mod parse;
pub mod sort;
pub mod tree;

use crate::config::Config;
use crate::types::SortOptions;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where a command reads its channel strings from
#[derive(Debug, Clone, Default)]
pub struct ChannelInput {
    /// Channels given on the command line
    pub channels: Vec<String>,
    /// File with one or more channels per line
    pub file: Option<PathBuf>,
}

impl ChannelInput {
    /// Collect channels from arguments, then the file, then piped stdin
    ///
    /// # Errors
    ///
    /// Fails when the file or stdin cannot be read, or nothing was given.
    pub fn read(&self) -> Result<Vec<String>> {
        let channels: Vec<String> = if !self.channels.is_empty() {
            self.channels.iter().flat_map(|c| split_channels(c)).collect()
        } else if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            split_channels(&content)
        } else if !std::io::stdin().is_terminal() {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read channels from stdin")?;
            split_channels(&content)
        } else {
            Vec::new()
        };

        if channels.is_empty() {
            anyhow::bail!("No channels given. Pass them as arguments, with --file, or on stdin.");
        }

        debug!("Read {} channels", channels.len());
        Ok(channels)
    }
}

/// Split text into channel strings
///
/// Channels may be separated by whitespace, commas or newlines. Anything
/// after a `#` on a line is ignored.
#[must_use]
pub fn split_channels(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

/// Sort options from the `--default-track` flag, else the config file
#[must_use]
pub fn sort_options(default_track: Option<String>, config: &Config) -> SortOptions {
    SortOptions {
        default_track: default_track.or_else(|| config.default_track.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_channels() {
        let text = "stable, 2.0/beta\n# comment\n\n  edge/fix  # trailing\nlatest/candidate";
        assert_eq!(
            split_channels(text),
            vec!["stable", "2.0/beta", "edge/fix", "latest/candidate"]
        );
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            default_track: Some("2.0".into()),
            ..Config::default()
        };
        assert_eq!(sort_options(None, &config).default_track(), "2.0");
        assert_eq!(sort_options(Some("3.0".into()), &config).default_track(), "3.0");
        assert_eq!(sort_options(None, &Config::default()).default_track(), "latest");
    }
}
