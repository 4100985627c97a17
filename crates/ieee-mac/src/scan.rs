use crate::{grammar, MacAddress};
use std::iter::FusedIterator;
use tracing::debug;

/// Iterator over the MAC addresses found in a piece of text
///
/// Created by [`find_addresses`]. Matches are yielded left to right and
/// never overlap; once a match is consumed the search resumes right after
/// it.
#[derive(Debug)]
pub struct Addresses<'t> {
    matches: regex::CaptureMatches<'static, 't>,
}

/// Scan `text` for MAC addresses in any notation
///
/// Unlike [`MacAddress::parse`], the addresses may sit anywhere in the text.
/// No match is an empty iterator, never an error.
pub fn find_addresses(text: &str) -> Addresses<'_> {
    Addresses {
        matches: grammar::scan(text),
    }
}

impl Iterator for Addresses<'_> {
    type Item = MacAddress;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.matches.by_ref() {
            if let Some((notation, octets)) = grammar::decode(&caps) {
                let mac = MacAddress::with_notation(octets, notation);
                debug!("Found {} address {}", notation, mac);
                return Some(mac);
            }
        }
        None
    }
}

impl FusedIterator for Addresses<'_> {}
