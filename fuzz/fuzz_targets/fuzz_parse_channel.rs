// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use snap_channels::channel::parse_channel;
use snap_channels::types::SortOptions;

fuzz_target!(|data: &str| {
    if let Ok(parsed) = parse_channel(data, &SortOptions::default()) {
        assert_eq!(parsed.to_shorthand(), data);
    }
});
