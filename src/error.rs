// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Errors raised while parsing channel strings

use thiserror::Error;

/// Channel parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Segment count outside 1..=3
    #[error("Invalid channel format: '{channel}' has {segments} segments, expected risk, track/risk, risk/branch or track/risk/branch")]
    InvalidFormat {
        /// The offending channel string
        channel: String,
        /// Number of `/`-separated segments found
        segments: usize,
    },

    /// Empty input or a `//` inside the channel
    #[error("Invalid channel format: '{channel}' contains an empty segment")]
    EmptySegment {
        /// The offending channel string
        channel: String,
    },
}

/// Result alias for channel operations
pub type Result<T> = std::result::Result<T, ChannelError>;

impl ChannelError {
    /// The channel string that failed to parse
    #[must_use]
    pub fn channel(&self) -> &str {
        match self {
            Self::InvalidFormat { channel, .. } | Self::EmptySegment { channel } => channel,
        }
    }
}
