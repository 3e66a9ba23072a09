// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - writes the sorted channel tree in various formats

use crate::commands::ChannelInput;
use crate::tree::sort_channels;
use crate::types::SortOptions;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ExportFormat {
    /// Parse format from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Get file extension for format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Run the export command
pub fn run(input: &ChannelInput, options: &SortOptions, format: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format);

    let export_format = ExportFormat::from_name(format)
        .ok_or_else(|| anyhow::anyhow!("Unknown export format: {}. Supported: dot, json, toml", format))?;

    let channels = input.read()?;
    let sorted = sort_channels(&channels, options).context("Failed to sort channels")?;

    let content = match export_format {
        ExportFormat::Dot => sorted.to_dot(),
        ExportFormat::Json => sorted.to_json().context("Failed to serialize channels to JSON")?,
        ExportFormat::Toml => sorted.to_toml().context("Failed to serialize channels to TOML")?,
    };

    match output {
        Some(mut path) => {
            if path.extension().is_none() {
                path.set_extension(export_format.extension());
            }
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::from_name("Graphviz"), Some(ExportFormat::Dot));
        assert_eq!(ExportFormat::from_name("toml"), Some(ExportFormat::Toml));
        assert_eq!(ExportFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_export_adds_extension() {
        let dir = TempDir::new().unwrap();
        let input = ChannelInput {
            channels: vec!["stable".into(), "2.0/edge".into()],
            file: None,
        };

        run(&input, &SortOptions::default(), "toml", Some(dir.path().join("channels"))).unwrap();

        let content = fs::read_to_string(dir.path().join("channels.toml")).unwrap();
        let value: toml::Table = content.parse().unwrap();
        assert_eq!(value.get("list").and_then(toml::Value::as_array).map(Vec::len), Some(2));
    }
}
