//! Parse, find and convert MAC addresses between text notations
//!
//! Four layouts are understood:
//!
//! - unix: `00:11:22:33:44:55`
//! - windows: `00-11-22-33-44-55`
//! - cisco: `0011.2233.4455`
//! - bare: `001122334455`
//!
//! The library only works on strings. It does no I/O and does not check that
//! an address belongs to an actual device.

mod error;
mod grammar;
pub mod mac;
pub mod notation;
pub mod scan;

pub use error::MacError;
pub use mac::MacAddress;
pub use notation::Notation;
pub use scan::{find_addresses, Addresses};

pub type Result<T> = std::result::Result<T, MacError>;

/// Whether `text` is exactly one MAC address in any notation
///
/// Empty input is simply not a MAC address.
pub fn is_mac(text: &str) -> bool {
    grammar::is_exact(&text.to_lowercase())
}

/// Parse a single MAC address, see [`MacAddress::parse`]
pub fn parse(text: &str) -> Result<MacAddress> {
    MacAddress::parse(text)
}

/// Render `mac` in `notation`
pub fn to_notation(mac: &MacAddress, notation: Notation) -> String {
    mac.to_notation(notation)
}
