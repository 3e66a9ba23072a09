// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for channel parsing and ordering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snap_channels::channel::parse_channel;
use snap_channels::sort::sort_alpha_num;
use snap_channels::tree::sort_channels;
use snap_channels::types::SortOptions;

/// A channel map shaped like a busy snap: many tracks, a few branches each
fn channel_map(tracks: usize) -> Vec<String> {
    let mut channels = Vec::new();
    for t in 0..tracks {
        let track = if t % 3 == 0 { format!("feature-{t}") } else { format!("{}.{}", t / 10, t % 10) };
        for risk in ["stable", "candidate", "beta", "edge"] {
            channels.push(format!("{track}/{risk}"));
        }
        channels.push(format!("{track}/edge/fix-{t}"));
        channels.push(format!("{track}/beta/{t}.0.1"));
    }
    channels.push("stable".to_string());
    channels
}

fn bench_parse(c: &mut Criterion) {
    let options = SortOptions::default();
    c.bench_function("parse_channel", |b| {
        b.iter(|| {
            for channel in ["stable", "2.0/beta", "edge/fix", "2.0/beta/fix"] {
                black_box(parse_channel(black_box(channel), &options).ok());
            }
        });
    });
}

fn bench_sort_alpha_num(c: &mut Criterion) {
    let names: Vec<String> = (0..200)
        .map(|i| if i % 2 == 0 { format!("{}.{}.{}", i / 20, i % 20, i) } else { format!("track-{i}") })
        .collect();
    c.bench_function("sort_alpha_num_200", |b| {
        b.iter(|| sort_alpha_num(black_box(&names), Some("latest")));
    });
}

fn bench_sort_channels(c: &mut Criterion) {
    let options = SortOptions::default();
    let mut group = c.benchmark_group("sort_channels");
    for tracks in [10, 100, 500] {
        let channels = channel_map(tracks);
        group.bench_with_input(BenchmarkId::from_parameter(tracks), &channels, |b, channels| {
            b.iter(|| sort_channels(black_box(channels), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_sort_alpha_num, bench_sort_channels);
criterion_main!(benches);
