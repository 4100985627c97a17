use crate::{grammar, MacError, Notation};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

/// MAC address representation
///
/// Remembers the notation it was parsed from so it can be printed back the
/// same way, but two addresses are equal whenever their octets are.
#[derive(Clone, Copy)]
pub struct MacAddress {
    octets: [u8; 6],
    notation: Notation,
}

impl MacAddress {
    /// ff:ff:ff:ff:ff:ff
    pub const BROADCAST: MacAddress = MacAddress {
        octets: [0xFF; 6],
        notation: Notation::Unix,
    };

    /// Create a new MAC address from a byte array, rendered as unix by default
    pub fn new(octets: [u8; 6]) -> Self {
        Self::with_notation(octets, Notation::Unix)
    }

    /// Create a MAC address whose native rendering is `notation`
    pub fn with_notation(octets: [u8; 6], notation: Notation) -> Self {
        Self { octets, notation }
    }

    /// Parse a MAC address written in any supported notation
    ///
    /// The whole string must be one address; letters may be in either case.
    pub fn parse(text: &str) -> Result<Self, MacError> {
        if text.is_empty() {
            return Err(MacError::MissingInput);
        }

        let lowered = text.to_lowercase();
        match grammar::exact(&lowered) {
            Some((notation, octets)) => Ok(Self { octets, notation }),
            None => {
                trace!("Rejected mac address candidate {:?}", text);
                Err(MacError::InvalidFormat(lowered))
            }
        }
    }

    /// The six bytes in network order
    pub fn octets(&self) -> [u8; 6] {
        self.octets
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.octets
    }

    /// Notation this address was parsed from
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Render in `notation`, independently of the native one
    pub fn to_notation(&self, notation: Notation) -> String {
        notation.render(&self.octets)
    }

    pub fn to_unix(&self) -> String {
        self.to_notation(Notation::Unix)
    }

    pub fn to_windows(&self) -> String {
        self.to_notation(Notation::Windows)
    }

    pub fn to_cisco(&self) -> String {
        self.to_notation(Notation::Cisco)
    }

    pub fn to_bare(&self) -> String {
        self.to_notation(Notation::Bare)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_notation(self.notation))
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({})", self)
    }
}

impl PartialEq for MacAddress {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for MacAddress {}

impl Hash for MacAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state);
    }
}

impl PartialEq<str> for MacAddress {
    fn eq(&self, other: &str) -> bool {
        MacAddress::parse(other).is_ok_and(|parsed| parsed == *self)
    }
}

impl PartialEq<&str> for MacAddress {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for MacAddress {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<MacAddress> for str {
    fn eq(&self, other: &MacAddress) -> bool {
        *other == *self
    }
}

impl PartialEq<MacAddress> for &str {
    fn eq(&self, other: &MacAddress) -> bool {
        *other == **self
    }
}

impl PartialEq<MacAddress> for String {
    fn eq(&self, other: &MacAddress) -> bool {
        *other == *self.as_str()
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = MacError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.octets
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        MacAddress::parse(&text).map_err(de::Error::custom)
    }
}
