use thiserror::Error;

/// Errors returned when turning text into a MAC address or a notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    /// The candidate was empty where an address was required
    #[error("Invalid mac address: None")]
    MissingInput,
    /// The candidate matches none of the supported notations
    #[error("Invalid mac address: {0}")]
    InvalidFormat(String),
    /// The notation name is not one of unix, windows, cisco or bare
    #[error("Unknown mac address notation: {0}")]
    UnknownNotation(String),
}
