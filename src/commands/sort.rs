// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Sort command - print channels in display order

use crate::commands::{tree, ChannelInput};
use crate::tree::sort_channels;
use crate::types::SortOptions;
use anyhow::{Context, Result};
use tracing::info;

/// How `sort` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One channel per line
    List,
    /// Indented track/risk/branch tree
    Tree,
    /// `{list, tree}` as JSON
    Json,
}

impl OutputMode {
    /// Parse mode from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "list" | "ls" => Some(Self::List),
            "tree" => Some(Self::Tree),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Run the sort command
pub fn run(input: &ChannelInput, options: &SortOptions, mode: OutputMode, color: bool) -> Result<()> {
    let channels = input.read()?;
    info!("Sorting {} channels (default track: {})", channels.len(), options.default_track());

    let sorted = sort_channels(&channels, options).context("Failed to sort channels")?;

    match mode {
        OutputMode::List => {
            for channel in &sorted.list {
                println!("{channel}");
            }
        }
        OutputMode::Tree => print!("{}", tree::render(&sorted, color)),
        OutputMode::Json => println!("{}", sorted.to_json()?),
    }

    Ok(())
}
