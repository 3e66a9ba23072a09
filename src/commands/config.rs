// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use crate::config::{self, Config};
use anyhow::Result;
use std::path::Path;

pub fn run(config: &Config, path: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            println!("# {}", path.display());
            for (k, v) in config.entries() {
                println!("{k} = {v}");
            }
        }
        (Some(k), None) => {
            let v = config
                .get(k)
                .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}. Valid: {}", k, config::KEYS.join(", ")))?;
            println!("{v}");
        }
        (Some(k), Some(v)) => {
            tracing::info!("Setting {} = {}", k, v);
            config::set(path, k, v)?;
            println!("Set {} = {} in {}", k, v, path.display());
        }
    }
    Ok(())
}
