//! Unified pattern for the four notations
//!
//! Each notation is a named alternative of one regex, so a single search
//! both recognizes an address and tells which layout it was written in.
//! The alternatives are mutually exclusive at any start position (they
//! disagree on the character after the second or fourth digit), so the
//! first alternative that matches is also the longest one.

use crate::Notation;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const SEGMENT: &str = "[0-9a-fA-F]{2}";

/// Pattern for one notation, without a capture name
fn layout(notation: Notation) -> String {
    let s = SEGMENT;
    match notation {
        Notation::Unix => format!("{s}:{s}:{s}:{s}:{s}:{s}"),
        Notation::Windows => format!("{s}-{s}-{s}-{s}-{s}-{s}"),
        Notation::Cisco => format!(r"{s}{s}\.{s}{s}\.{s}{s}"),
        Notation::Bare => format!("{s}{s}{s}{s}{s}{s}"),
    }
}

/// `(?:(?P<unix>...)|(?P<windows>...)|...)`
fn alternation() -> String {
    let alternatives: Vec<String> = Notation::ALL
        .into_iter()
        .map(|n| format!("(?P<{}>{})", n.as_str(), layout(n)))
        .collect();
    format!("(?:{})", alternatives.join("|"))
}

static SCAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&alternation()).expect("mac address alternation should be valid regex")
});

static EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\A{}\z", alternation()))
        .expect("anchored mac address alternation should be valid regex")
});

/// Whether the whole of `text` is an address in one notation
pub(crate) fn is_exact(text: &str) -> bool {
    EXACT.is_match(text)
}

/// Match the whole of `text`, returning its notation and octets
pub(crate) fn exact(text: &str) -> Option<(Notation, [u8; 6])> {
    EXACT.captures(text).and_then(|caps| decode(&caps))
}

/// Leftmost non-overlapping matches anywhere in `text`
pub(crate) fn scan(text: &str) -> regex::CaptureMatches<'static, '_> {
    SCAN.captures_iter(text)
}

/// Notation and octets of one successful match
pub(crate) fn decode(caps: &Captures<'_>) -> Option<(Notation, [u8; 6])> {
    let notation = Notation::ALL
        .into_iter()
        .find(|n| caps.name(n.as_str()).is_some())?;
    let octets = octets_of(caps.get(0)?.as_str())?;
    Some((notation, octets))
}

/// Read the twelve hex digits of a matched address as six bytes,
/// skipping whatever separators the notation uses
fn octets_of(matched: &str) -> Option<[u8; 6]> {
    let digits: Vec<u8> = matched.bytes().filter(u8::is_ascii_hexdigit).collect();
    if digits.len() != 12 {
        return None;
    }

    let mut octets = [0u8; 6];
    for (octet, pair) in octets.iter_mut().zip(digits.chunks(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *octet = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(octets)
}
