// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snap_channels::tree::sort_channels;
use snap_channels::types::SortOptions;

#[derive(Debug, Arbitrary)]
struct Input {
    channels: Vec<String>,
    default_track: Option<String>,
}

fuzz_target!(|input: Input| {
    let options = SortOptions {
        default_track: input.default_track,
    };
    if let Ok(first) = sort_channels(&input.channels, &options) {
        let second = sort_channels(&first.list, &options).expect("sorted list must parse");
        assert_eq!(first.list, second.list);
    }
});
