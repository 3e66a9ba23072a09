// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Parse command - break channel strings into track, risk and branch

use crate::channel::parse_channels;
use crate::commands::ChannelInput;
use crate::types::{ParsedChannel, SortOptions};
use anyhow::{Context, Result};

/// Run the parse command
pub fn run(input: &ChannelInput, options: &SortOptions, json: bool) -> Result<()> {
    let channels = input.read()?;
    let parsed = parse_channels(&channels, options).context("Failed to parse channels")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for (input, channel) in channels.iter().zip(&parsed) {
        println!("{}", describe(input, channel));
    }

    Ok(())
}

/// One-line description of a parsed channel
#[must_use]
pub fn describe(input: &str, channel: &ParsedChannel) -> String {
    let mut given = Vec::new();
    if channel.format.track {
        given.push("track");
    }
    if channel.format.risk {
        given.push("risk");
    }
    if channel.format.branch {
        given.push("branch");
    }

    format!(
        "{}: track={} risk={} branch={} (given: {})",
        input,
        channel.track,
        channel.risk,
        channel.branch,
        given.join(", ")
    )
}
