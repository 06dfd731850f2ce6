//! Obstacle configuration loader
//!
//! Parses the obstacle set from a textual literal such as
//! `{(1,4), (3,5), (7,4)}`. The grammar is data-only (sets, lists, or
//! tuples of integer pairs); input is never evaluated. Runs once at
//! service startup; the result is immutable for the process lifetime.

use std::collections::HashSet;

use tracing::warn;

use crate::model::Coord;

/// The fixed fallback obstacle set
pub fn default_obstacles() -> HashSet<Coord> {
    [(1, 4), (3, 5), (7, 4)].into_iter().collect()
}

/// Parse an obstacle literal, falling back to the default set.
///
/// Elements that are not exactly a 2-tuple of integers are silently
/// discarded. If parsing fails or no valid element remains, the default
/// set is returned; the fallback is logged and never surfaced to callers.
pub fn load_obstacles(raw: &str) -> HashSet<Coord> {
    let parsed = parse_obstacles(raw);
    if parsed.is_empty() {
        warn!(value = %raw, "obstacle literal empty or unparseable, using default set");
        return default_obstacles();
    }
    parsed
}

/// Strict parser for the obstacle literal grammar.
///
/// Accepts `{...}`, `[...]`, or `(...)` wrapping comma-separated
/// `(int,int)` pairs, or a single bare pair. Returns an empty set on any
/// structural failure.
pub fn parse_obstacles(raw: &str) -> HashSet<Coord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return HashSet::new();
    }

    // A bare pair is a one-element collection
    if let Some(pair) = parse_pair(trimmed) {
        return HashSet::from([pair]);
    }

    let inner = match strip_wrapper(trimmed) {
        Some(inner) => inner,
        None => return HashSet::new(),
    };

    let mut set = HashSet::new();
    for element in split_top_level(inner) {
        let element = element.trim();
        if element.is_empty() {
            continue;
        }
        if let Some(pair) = parse_pair(element) {
            set.insert(pair);
        }
    }
    set
}

/// Strip one matching pair of `{}`, `[]`, or `()` wrapper brackets
fn strip_wrapper(s: &str) -> Option<&str> {
    let open = s.chars().next()?;
    let close = match open {
        '{' => '}',
        '[' => ']',
        '(' => ')',
        _ => return None,
    };
    if s.ends_with(close) && s.len() >= 2 {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Split on commas outside of parentheses
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Parse exactly `(int,int)`, anything else is rejected
fn parse_pair(s: &str) -> Option<Coord> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    if inner.contains('(') || inner.contains(')') {
        return None;
    }
    let mut parts = inner.split(',');
    let x = parts.next()?.trim().parse::<i64>().ok()?;
    let y = parts.next()?.trim().parse::<i64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}
