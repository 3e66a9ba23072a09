// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use crate::channel::get_channel_string;
use crate::types::Risk;
use anyhow::Result;
use tracing::warn;

pub fn run(track: &str, risk: &str, branch: Option<&str>) -> Result<()> {
    if !Risk::is_risk(risk) {
        warn!("'{}' is not a known risk (stable, candidate, beta, edge)", risk);
    }
    println!("{}", get_channel_string(track, risk, branch));
    Ok(())
}
