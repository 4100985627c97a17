use crate::MacError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual layouts a MAC address can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// 00:11:22:33:44:55
    Unix,
    /// 00-11-22-33-44-55
    Windows,
    /// 0011.2233.4455
    Cisco,
    /// 001122334455
    Bare,
}

impl Notation {
    /// Every notation, in the order alternatives are tried by the grammar
    pub const ALL: [Notation; 4] = [
        Notation::Unix,
        Notation::Windows,
        Notation::Cisco,
        Notation::Bare,
    ];

    /// Lower-case name, also used as the grammar's capture name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
            Self::Cisco => "cisco",
            Self::Bare => "bare",
        }
    }

    /// Broadcast address written in this notation, handy as a hint for users
    pub fn example(self) -> &'static str {
        match self {
            Self::Unix => "FF:FF:FF:FF:FF:FF",
            Self::Windows => "FF-FF-FF-FF-FF-FF",
            Self::Cisco => "FFFF.FFFF.FFFF",
            Self::Bare => "FFFFFFFFFFFF",
        }
    }

    /// Render six octets in this layout, two lower-case hex digits each
    pub fn render(self, o: &[u8; 6]) -> String {
        match self {
            Self::Unix => format!(
                "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                o[0], o[1], o[2], o[3], o[4], o[5]
            ),
            Self::Windows => format!(
                "{:02x}-{:02x}-{:02x}-{:02x}-{:02x}-{:02x}",
                o[0], o[1], o[2], o[3], o[4], o[5]
            ),
            Self::Cisco => format!(
                "{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}",
                o[0], o[1], o[2], o[3], o[4], o[5]
            ),
            Self::Bare => format!(
                "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
                o[0], o[1], o[2], o[3], o[4], o[5]
            ),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MacError::UnknownNotation(s.to_string()))
    }
}
