// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Alphanumeric ordering for track and branch names
//!
//! Names starting with a letter are listed alphabetically, names starting
//! with a digit are treated as versions and listed newest first:
//!
//! ```text
//! latest  <- hoisted
//! beta-fixes
//! zzz
//! 10.1
//! 2.0
//! 1.0.1
//! ```

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Sort `items` as hoisted, then text (ascending), then numeric (descending)
///
/// An item goes to the numeric bucket when its first character is an ASCII
/// digit, so `1.1-hotfix` counts as numeric. Items equal to `hoist` are
/// placed first in their original order. The input slice is left untouched.
#[must_use]
pub fn sort_alpha_num<S: AsRef<str>>(items: &[S], hoist: Option<&str>) -> Vec<String> {
    let mut hoisted = Vec::new();
    let mut text = Vec::new();
    let mut numeric = Vec::new();

    for item in items {
        let item = item.as_ref();
        if hoist == Some(item) {
            hoisted.push(item.to_string());
        } else if starts_with_digit(item) {
            numeric.push(item.to_string());
        } else {
            text.push(item.to_string());
        }
    }

    text.sort_by(|a, b| collate(a, b, false).then_with(|| tie_break(a, b)));
    numeric.sort_by(|a, b| collate(b, a, true).then_with(|| tie_break(a, b)));

    hoisted.into_iter().chain(text).chain(numeric).collect()
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Compare two names the way a case-insensitive collator would
///
/// Punctuation and whitespace sort before digits, digits before letters.
/// With `numeric` set, runs of digits compare by value so `10` follows `9`.
#[must_use]
pub fn collate(a: &str, b: &str, numeric: bool) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let (l, r) = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        if numeric && l.is_ascii_digit() && r.is_ascii_digit() {
            let l_run = take_digits(&mut left);
            let r_run = take_digits(&mut right);
            let ord = compare_digit_runs(&l_run, &r_run);
            if ord != Ordering::Equal {
                return ord;
            }
            continue;
        }

        left.next();
        right.next();
        let ord = char_class(l)
            .cmp(&char_class(r))
            .then_with(|| l.to_lowercase().cmp(r.to_lowercase()));
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Order names that collate equal: lowercase before uppercase, then bytes
fn tie_break(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(swap_case)
        .cmp(b.chars().map(swap_case))
        .then_with(|| a.cmp(b))
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        0
    } else if c.is_ascii_digit() {
        1
    } else {
        2
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
