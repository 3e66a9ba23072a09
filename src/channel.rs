// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Channel string parsing and formatting

use crate::error::{ChannelError, Result};
use crate::types::{ChannelFormat, ParsedChannel, Risk, SortOptions, NO_BRANCH};
use tracing::trace;

/// Parse a channel string in any of its shorthand forms
///
/// | input               | track    | risk  | branch  |
/// |---------------------|----------|-------|---------|
/// | `risk`              | default  | risk  | `_base` |
/// | `track/risk`        | track    | risk  | `_base` |
/// | `risk/branch`       | default  | risk  | branch  |
/// | `track/risk/branch` | track    | risk  | branch  |
///
/// A two-segment string is read as `risk/branch` whenever its first segment
/// is one of the fixed risk names, so a track named `beta` cannot be
/// expressed without a branch.
///
/// # Errors
///
/// Returns [`ChannelError::EmptySegment`] for empty input or empty segments
/// and [`ChannelError::InvalidFormat`] for more than three segments.
pub fn parse_channel(channel: &str, options: &SortOptions) -> Result<ParsedChannel> {
    let segments: Vec<&str> = channel.split('/').collect();

    if segments.len() > 3 {
        return Err(ChannelError::InvalidFormat {
            channel: channel.to_string(),
            segments: segments.len(),
        });
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(ChannelError::EmptySegment {
            channel: channel.to_string(),
        });
    }

    let default_track = options.default_track();

    let parsed = match segments.as_slice() {
        [risk] => ParsedChannel {
            track: default_track.to_string(),
            risk: (*risk).to_string(),
            branch: NO_BRANCH.to_string(),
            format: ChannelFormat { track: false, risk: true, branch: false },
        },
        [first, second] if Risk::is_risk(first) => ParsedChannel {
            track: default_track.to_string(),
            risk: (*first).to_string(),
            branch: (*second).to_string(),
            format: ChannelFormat { track: false, risk: true, branch: true },
        },
        [track, risk] => ParsedChannel {
            track: (*track).to_string(),
            risk: (*risk).to_string(),
            branch: NO_BRANCH.to_string(),
            format: ChannelFormat { track: true, risk: true, branch: false },
        },
        [track, risk, branch] => ParsedChannel {
            track: (*track).to_string(),
            risk: (*risk).to_string(),
            branch: (*branch).to_string(),
            format: ChannelFormat { track: true, risk: true, branch: true },
        },
        _ => {
            return Err(ChannelError::InvalidFormat {
                channel: channel.to_string(),
                segments: segments.len(),
            })
        }
    };

    trace!("Parsed {} as {}/{}/{}", channel, parsed.track, parsed.risk, parsed.branch);
    Ok(parsed)
}

/// Parse every channel in `channels`, stopping at the first malformed one
///
/// # Errors
///
/// Propagates the first [`ChannelError`] from [`parse_channel`].
pub fn parse_channels<S: AsRef<str>>(channels: &[S], options: &SortOptions) -> Result<Vec<ParsedChannel>> {
    channels
        .iter()
        .map(|c| parse_channel(c.as_ref(), options))
        .collect()
}

/// Join track, risk and optional branch into `track/risk[/branch]`
///
/// An empty branch is treated as absent. This always writes the track, so it
/// is not the inverse of [`parse_channel`].
#[must_use]
pub fn get_channel_string(track: &str, risk: &str, branch: Option<&str>) -> String {
    match branch {
        Some(b) if !b.is_empty() => format!("{track}/{risk}/{b}"),
        _ => format!("{track}/{risk}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ParsedChannel {
        parse_channel(s, &SortOptions::default()).unwrap()
    }

    #[test]
    fn test_risk_only() {
        let parsed = parse("stable");
        assert_eq!(parsed.track, "latest");
        assert_eq!(parsed.risk, "stable");
        assert_eq!(parsed.branch, "_base");
        assert_eq!(parsed.format, ChannelFormat { track: false, risk: true, branch: false });
    }

    #[test]
    fn test_track_risk() {
        let parsed = parse("test/stable");
        assert_eq!(parsed.track, "test");
        assert_eq!(parsed.risk, "stable");
        assert_eq!(parsed.branch, "_base");
        assert_eq!(parsed.format, ChannelFormat { track: true, risk: true, branch: false });
    }

    #[test]
    fn test_risk_branch() {
        let parsed = parse("stable/test");
        assert_eq!(parsed.track, "latest");
        assert_eq!(parsed.risk, "stable");
        assert_eq!(parsed.branch, "test");
        assert_eq!(parsed.format, ChannelFormat { track: false, risk: true, branch: true });
    }

    #[test]
    fn test_full_channel() {
        let parsed = parse("1.0/beta/hotfix-2");
        assert_eq!(parsed.track, "1.0");
        assert_eq!(parsed.risk, "beta");
        assert_eq!(parsed.branch, "hotfix-2");
        assert_eq!(parsed.format, ChannelFormat { track: true, risk: true, branch: true });
    }

    #[test]
    fn test_default_track_option() {
        let options = SortOptions::with_default_track("test");
        assert_eq!(parse_channel("stable", &options).unwrap().track, "test");
        assert_eq!(parse_channel("edge/fix", &options).unwrap().track, "test");
        assert_eq!(parse_channel("2.0/edge", &options).unwrap().track, "2.0");
    }

    #[test]
    fn test_malformed_channels() {
        let options = SortOptions::default();
        assert_eq!(
            parse_channel("a/b/c/d", &options),
            Err(ChannelError::InvalidFormat { channel: "a/b/c/d".into(), segments: 4 })
        );
        assert!(matches!(parse_channel("", &options), Err(ChannelError::EmptySegment { .. })));
        assert!(matches!(parse_channel("latest//stable", &options), Err(ChannelError::EmptySegment { .. })));
        assert!(matches!(parse_channel("stable/", &options), Err(ChannelError::EmptySegment { .. })));
    }

    #[test]
    fn test_shorthand_roundtrip() {
        for input in ["stable", "2.0/edge", "beta/fix", "2.0/beta/fix", "latest/stable"] {
            assert_eq!(parse(input).to_shorthand(), input);
        }
    }

    #[test]
    fn test_get_channel_string() {
        assert_eq!(get_channel_string("latest", "stable", None), "latest/stable");
        assert_eq!(get_channel_string("latest", "stable", Some("")), "latest/stable");
        assert_eq!(get_channel_string("2.0", "beta", Some("fix")), "2.0/beta/fix");
        assert_eq!(parse("beta/fix").full_name(), "latest/beta/fix");
    }
}
