// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Snap channels library - parse, group and order snap channel names
//!
//! A channel is addressed as `track/risk/branch`, but store responses and
//! publishers use shorthand forms (`risk`, `track/risk`, `risk/branch`).
//! This crate parses those forms, folds them into a track → risk → branch
//! tree, and produces a stable, human-meaningful ordering of the tree and
//! of the flat channel list.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod channel;
pub mod commands;
pub mod config;
pub mod error;
pub mod sort;
pub mod tree;

pub use channel::{get_channel_string, parse_channel};
pub use error::{ChannelError, Result};
pub use sort::sort_alpha_num;
pub use tree::{create_channel_tree, sort_channels};

/// Core channel data types
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// Track used when a channel string does not name one
    pub const DEFAULT_TRACK: &str = "latest";

    /// Branch sentinel meaning "no branch"
    pub const NO_BRANCH: &str = "_base";

    // =========================================================================
    // Risk
    // =========================================================================

    /// Stability level of a channel, ordered from most to least stable
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Risk {
        /// Production ready
        Stable,
        /// Release candidate
        Candidate,
        /// Feature complete, still being tested
        Beta,
        /// Latest development builds
        Edge,
    }

    impl Risk {
        /// Fixed stability order used when sorting risks
        pub const ALL: [Risk; 4] = [Risk::Stable, Risk::Candidate, Risk::Beta, Risk::Edge];

        /// Name as it appears in a channel string
        #[must_use]
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Stable => "stable",
                Self::Candidate => "candidate",
                Self::Beta => "beta",
                Self::Edge => "edge",
            }
        }

        /// Look up a risk by its exact channel-string name
        #[must_use]
        pub fn from_name(name: &str) -> Option<Self> {
            Self::ALL.into_iter().find(|r| r.as_str() == name)
        }

        /// Whether `name` is one of the fixed risk names
        #[must_use]
        pub fn is_risk(name: &str) -> bool {
            Self::from_name(name).is_some()
        }

        /// Position in the stability table (0 = most stable)
        #[must_use]
        pub fn position(&self) -> usize {
            Self::ALL.iter().position(|r| r == self).unwrap_or(Self::ALL.len())
        }
    }

    impl fmt::Display for Risk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for Risk {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::from_name(s).ok_or_else(|| {
                format!("Unknown risk: {s}. Valid: stable, candidate, beta, edge")
            })
        }
    }

    // =========================================================================
    // Parsed channel
    // =========================================================================

    /// Which components were written out in the original channel string
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ChannelFormat {
        /// Track segment was present
        pub track: bool,
        /// Risk segment was present
        pub risk: bool,
        /// Branch segment was present
        pub branch: bool,
    }

    /// A channel string broken into its track, risk and branch
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ParsedChannel {
        /// Track name (`latest` or the configured default when omitted)
        pub track: String,
        /// Risk name, not validated against [`Risk::ALL`]
        pub risk: String,
        /// Branch name (`_base` when omitted)
        pub branch: String,
        /// Shorthand the channel was written in
        pub format: ChannelFormat,
    }

    impl ParsedChannel {
        /// Known risk level, if the risk name is one of the fixed four
        #[must_use]
        pub fn known_risk(&self) -> Option<Risk> {
            Risk::from_name(&self.risk)
        }

        /// True when the channel has no branch
        #[must_use]
        pub fn is_base(&self) -> bool {
            self.branch == NO_BRANCH
        }

        /// Whether this channel addresses the exact same track, risk and branch
        #[must_use]
        pub fn same_path(&self, track: &str, risk: &str, branch: &str) -> bool {
            self.track == track && self.risk == risk && self.branch == branch
        }

        /// Rebuild the channel string in the shorthand it was parsed from
        #[must_use]
        pub fn to_shorthand(&self) -> String {
            let mut parts: Vec<&str> = Vec::with_capacity(3);
            if self.format.track {
                parts.push(&self.track);
            }
            if self.format.risk {
                parts.push(&self.risk);
            }
            if self.format.branch {
                parts.push(&self.branch);
            }
            parts.join("/")
        }

        /// Fully qualified name, `track/risk` or `track/risk/branch`
        #[must_use]
        pub fn full_name(&self) -> String {
            let branch = if self.is_base() { None } else { Some(self.branch.as_str()) };
            crate::channel::get_channel_string(&self.track, &self.risk, branch)
        }
    }

    impl fmt::Display for ParsedChannel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.full_name())
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Options shared by parsing and sorting
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SortOptions {
        /// Track assumed for shorthand channels and hoisted first when sorting
        #[serde(default)]
        pub default_track: Option<String>,
    }

    impl SortOptions {
        /// Options with a specific default track
        pub fn with_default_track(track: impl Into<String>) -> Self {
            Self {
                default_track: Some(track.into()),
            }
        }

        /// The effective default track
        #[must_use]
        pub fn default_track(&self) -> &str {
            self.default_track.as_deref().unwrap_or(DEFAULT_TRACK)
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{ChannelError, Result};
    pub use crate::tree::{ChannelTree, SortedChannels};
    pub use crate::types::*;
}
