// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Tree command - show channels grouped by track and risk

use crate::commands::ChannelInput;
use crate::tree::{sort_channels, SortedChannels};
use crate::types::{SortOptions, NO_BRANCH};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Run the tree command
pub fn run(input: &ChannelInput, options: &SortOptions, json: bool, color: bool) -> Result<()> {
    let channels = input.read()?;
    let sorted = sort_channels(&channels, options).context("Failed to sort channels")?;

    if json {
        let content = serde_json::to_string_pretty(&sorted.tree).context("Failed to serialize tree")?;
        println!("{content}");
    } else {
        print!("{}", render(&sorted, color));
    }

    Ok(())
}

/// Render the ordered tree as indented text
#[must_use]
pub fn render(sorted: &SortedChannels, color: bool) -> String {
    let mut out = String::new();

    for track in &sorted.tree {
        if color {
            out.push_str(&format!("{}\n", track.name.bold()));
        } else {
            out.push_str(&format!("{}\n", track.name));
        }

        for risk in &track.risks {
            if color {
                out.push_str(&format!("  {}\n", risk.name.cyan()));
            } else {
                out.push_str(&format!("  {}\n", risk.name));
            }

            for branch in risk.branches.iter().filter(|b| b.name != NO_BRANCH) {
                if color {
                    out.push_str(&format!("    {}\n", branch.name.dimmed()));
                } else {
                    out.push_str(&format!("    {}\n", branch.name));
                }
            }
        }
    }

    out
}
