// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Channel tree construction and ordering

use crate::channel::{get_channel_string, parse_channels};
use crate::error::Result;
use crate::sort::sort_alpha_num;
use crate::types::{ParsedChannel, Risk, SortOptions, NO_BRANCH};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

// =============================================================================
// Unordered tree
// =============================================================================

/// Branch leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchNode {
    /// Branch name (`_base` for none)
    pub name: String,
}

/// Risk node keyed by branch name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskNode {
    /// Risk name
    pub name: String,
    /// Branches under this risk
    pub branches: BTreeMap<String, BranchNode>,
}

/// Track node keyed by risk name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackNode {
    /// Track name
    pub name: String,
    /// Risks under this track
    pub risks: BTreeMap<String, RiskNode>,
}

/// Track → risk → branch membership, without any display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelTree {
    tracks: BTreeMap<String, TrackNode>,
}

impl ChannelTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the track/risk/branch path of a parsed channel
    ///
    /// Adding the same path twice leaves the tree unchanged.
    pub fn insert(&mut self, channel: &ParsedChannel) {
        let track = self
            .tracks
            .entry(channel.track.clone())
            .or_insert_with(|| TrackNode {
                name: channel.track.clone(),
                risks: BTreeMap::new(),
            });

        let risk = track
            .risks
            .entry(channel.risk.clone())
            .or_insert_with(|| RiskNode {
                name: channel.risk.clone(),
                branches: BTreeMap::new(),
            });

        risk.branches.insert(
            channel.branch.clone(),
            BranchNode {
                name: channel.branch.clone(),
            },
        );
    }

    /// Get a track by name
    #[must_use]
    pub fn get(&self, track: &str) -> Option<&TrackNode> {
        self.tracks.get(track)
    }

    /// Names of all tracks
    #[must_use]
    pub fn track_names(&self) -> Vec<&str> {
        self.tracks.keys().map(String::as_str).collect()
    }

    /// Check whether a track/risk/branch path exists
    #[must_use]
    pub fn contains(&self, track: &str, risk: &str, branch: &str) -> bool {
        self.tracks
            .get(track)
            .and_then(|t| t.risks.get(risk))
            .is_some_and(|r| r.branches.contains_key(branch))
    }

    /// Number of tracks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the tree is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of distinct track/risk/branch paths
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.tracks
            .values()
            .flat_map(|t| t.risks.values())
            .map(|r| r.branches.len())
            .sum()
    }
}

/// Fold parsed channels into a [`ChannelTree`]
#[must_use]
pub fn create_channel_tree(channels: &[ParsedChannel]) -> ChannelTree {
    let mut tree = ChannelTree::new();
    for channel in channels {
        tree.insert(channel);
    }
    tree
}

// =============================================================================
// Ordered output
// =============================================================================

/// Branch in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    /// Branch name (`_base` for none)
    pub name: String,
}

/// Risk with its branches in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    /// Risk name
    pub name: String,
    /// Branches, `_base` first
    pub branches: Vec<BranchEntry>,
}

/// Track with its risks in stability order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Track name
    pub name: String,
    /// Risks, most stable first
    pub risks: Vec<RiskEntry>,
}

/// Result of [`sort_channels`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedChannels {
    /// Flat channel list, each entry in the shorthand it was given in
    ///
    /// When one channel was given in several shorthands, the shortest is used.
    pub list: Vec<String>,
    /// Ordered track → risk → branch tree
    pub tree: Vec<TrackEntry>,
}

impl SortedChannels {
    /// Track names in display order
    #[must_use]
    pub fn track_names(&self) -> Vec<&str> {
        self.tree.iter().map(|t| t.name.as_str()).collect()
    }

    /// Check if no channels were sorted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph channels {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n");

        for track in &self.tree {
            let track_id = format!("track:{}", track.name);
            dot.push_str(&format!("\n  \"{}\" [label=\"{}\"];\n", track_id, track.name));

            for risk in &track.risks {
                let risk_id = get_channel_string(&track.name, &risk.name, None);
                dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", risk_id, risk.name));
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", track_id, risk_id));

                for branch in risk.branches.iter().filter(|b| b.name != NO_BRANCH) {
                    let branch_id = get_channel_string(&track.name, &risk.name, Some(&branch.name));
                    dot.push_str(&format!(
                        "  \"{}\" [label=\"{}\", style=dashed];\n",
                        branch_id, branch.name
                    ));
                    dot.push_str(&format!("  \"{}\" -> \"{}\";\n", risk_id, branch_id));
                }
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export to TOML
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse, group and order a list of channel strings
///
/// Tracks come out default track first, then names starting with a letter
/// (ascending), then names starting with a digit (descending). Risks follow
/// the fixed stability order and risks outside it are dropped. Branches use
/// the same rule as tracks with `_base` hoisted first.
///
/// # Errors
///
/// Returns the first [`crate::ChannelError`] hit while parsing.
pub fn sort_channels<S: AsRef<str>>(channels: &[S], options: &SortOptions) -> Result<SortedChannels> {
    let parsed = parse_channels(channels, options)?;
    let tree = create_channel_tree(&parsed);
    debug!(
        "Built channel tree: {} channels, {} tracks, {} paths",
        parsed.len(),
        tree.len(),
        tree.path_count()
    );

    // Shortest shorthand wins for duplicate paths, ties broken alphabetically
    let mut shorthands: HashMap<(&str, &str, &str), String> = HashMap::new();
    for channel in &parsed {
        let candidate = channel.to_shorthand();
        shorthands
            .entry((channel.track.as_str(), channel.risk.as_str(), channel.branch.as_str()))
            .and_modify(|current| {
                if (candidate.len(), &candidate) < (current.len(), &*current) {
                    current.clone_from(&candidate);
                }
            })
            .or_insert_with(|| candidate.clone());
    }

    let mut sorted = SortedChannels::default();

    for track_name in sort_alpha_num(&tree.track_names(), Some(options.default_track())) {
        let Some(track) = tree.get(&track_name) else {
            continue;
        };

        for unknown in track.risks.keys().filter(|r| !Risk::is_risk(r)) {
            warn!("Dropping channels with unknown risk: {}/{}", track.name, unknown);
        }

        let risks: Vec<RiskEntry> = Risk::ALL
            .iter()
            .filter_map(|risk| track.risks.get(risk.as_str()))
            .map(|risk| {
                let branch_names: Vec<&str> = risk.branches.keys().map(String::as_str).collect();
                RiskEntry {
                    name: risk.name.clone(),
                    branches: sort_alpha_num(&branch_names, Some(NO_BRANCH))
                        .into_iter()
                        .map(|name| BranchEntry { name })
                        .collect(),
                }
            })
            .collect();

        for risk in &risks {
            for branch in &risk.branches {
                if let Some(channel) =
                    shorthands.get(&(track.name.as_str(), risk.name.as_str(), branch.name.as_str()))
                {
                    sorted.list.push(channel.clone());
                }
            }
        }

        sorted.tree.push(TrackEntry {
            name: track.name.clone(),
            risks,
        });
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::parse_channel;

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<&str> {
        items.iter().map(name).collect()
    }

    #[test]
    fn test_tree_paths_are_idempotent() {
        let options = SortOptions::default();
        let parsed: Vec<_> = ["stable", "latest/stable", "stable/fix", "2.0/edge"]
            .iter()
            .map(|c| parse_channel(c, &options).unwrap())
            .collect();

        let tree = create_channel_tree(&parsed);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.path_count(), 3);
        assert!(tree.contains("latest", "stable", "_base"));
        assert!(tree.contains("latest", "stable", "fix"));
        assert!(tree.contains("2.0", "edge", "_base"));
    }

    #[test]
    fn test_tree_ignores_insertion_order() {
        let options = SortOptions::default();
        let mut parsed: Vec<_> = ["1/beta", "stable", "zzz/edge/x"]
            .iter()
            .map(|c| parse_channel(c, &options).unwrap())
            .collect();
        let forward = create_channel_tree(&parsed);
        parsed.reverse();
        assert_eq!(forward, create_channel_tree(&parsed));
    }

    #[test]
    fn test_track_order() {
        let sorted =
            sort_channels(&["zzz/edge", "stable", "1/beta", "5.9.0/candidate"], &SortOptions::default())
                .unwrap();
        assert_eq!(sorted.track_names(), vec!["latest", "zzz", "5.9.0", "1"]);
    }

    #[test]
    fn test_risk_order() {
        let sorted =
            sort_channels(&["zzz/edge", "stable", "1/beta", "1/candidate"], &SortOptions::default()).unwrap();
        let track = sorted.tree.iter().find(|t| t.name == "1").unwrap();
        assert_eq!(names(&track.risks, |r| r.name.as_str()), vec!["candidate", "beta"]);
    }

    #[test]
    fn test_list_keeps_shorthand() {
        let sorted = sort_channels(
            &["zzz/edge", "stable", "1/beta/1.0.1", "1/beta/hotfix", "1/candidate"],
            &SortOptions::default(),
        )
        .unwrap();
        assert_eq!(
            sorted.list,
            vec!["stable", "zzz/edge", "1/candidate", "1/beta/hotfix", "1/beta/1.0.1"]
        );
    }

    #[test]
    fn test_base_branch_first() {
        let sorted = sort_channels(&["edge/zed", "edge", "edge/2", "edge/abc"], &SortOptions::default()).unwrap();
        let branches = &sorted.tree[0].risks[0].branches;
        assert_eq!(names(branches, |b| b.name.as_str()), vec!["_base", "abc", "zed", "2"]);
        assert_eq!(sorted.list, vec!["edge", "edge/abc", "edge/zed", "edge/2"]);
    }

    #[test]
    fn test_default_track_hoisted() {
        let options = SortOptions::with_default_track("2.0");
        let sorted = sort_channels(&["latest/stable", "stable", "3.0/edge"], &options).unwrap();
        assert_eq!(sorted.track_names(), vec!["2.0", "latest", "3.0"]);
        assert_eq!(sorted.list, vec!["stable", "latest/stable", "3.0/edge"]);
    }

    #[test]
    fn test_equivalent_shorthands_ignore_order() {
        let forward = sort_channels(&["stable", "latest/stable"], &SortOptions::default()).unwrap();
        let backward = sort_channels(&["latest/stable", "stable"], &SortOptions::default()).unwrap();
        assert_eq!(forward.list, vec!["stable"]);
        assert_eq!(backward.list, vec!["stable"]);

        let options = SortOptions::with_default_track("2.0");
        let sorted = sort_channels(&["2.0/edge/fix", "edge/fix"], &options).unwrap();
        assert_eq!(sorted.list, vec!["edge/fix"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let sorted = sort_channels(&["stable", "stable", "beta"], &SortOptions::default()).unwrap();
        assert_eq!(sorted.list, vec!["stable", "beta"]);
    }

    #[test]
    fn test_unknown_risk_dropped() {
        let sorted = sort_channels(&["stable", "2.0/nightly"], &SortOptions::default()).unwrap();
        assert_eq!(sorted.list, vec!["stable"]);
        assert_eq!(sorted.track_names(), vec!["latest", "2.0"]);
        assert!(sorted.tree[1].risks.is_empty());
    }

    #[test]
    fn test_malformed_input_errors() {
        assert!(sort_channels(&["stable", "a/b/c/d"], &SortOptions::default()).is_err());
    }

    #[test]
    fn test_empty_input() {
        let sorted = sort_channels::<&str>(&[], &SortOptions::default()).unwrap();
        assert!(sorted.is_empty());
        assert!(sorted.tree.is_empty());
    }

    #[test]
    fn test_to_dot() {
        let sorted = sort_channels(&["stable", "2.0/beta/fix"], &SortOptions::default()).unwrap();
        let dot = sorted.to_dot();

        assert!(dot.starts_with("digraph channels {"));
        assert!(dot.contains("\"track:latest\" -> \"latest/stable\";"));
        assert!(dot.contains("\"2.0/beta\" -> \"2.0/beta/fix\";"));
    }

    #[test]
    fn test_to_json_shape() {
        let sorted = sort_channels(&["stable"], &SortOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&sorted.to_json().unwrap()).unwrap();
        assert_eq!(value["list"][0], "stable");
        assert_eq!(value["tree"][0]["risks"][0]["branches"][0]["name"], "_base");
    }
}
