use std::fmt;

/// Result type for hyperliquid-wire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hyperliquid-wire
#[derive(Debug)]
pub enum Error {
    /// A struct could not be flattened into a signing payload
    Serialization(String),

    /// Hex input could not be decoded
    Decode { input: String, message: String },

    /// Coin is absent from the asset metadata map
    UnknownAsset(String),
}

impl Error {
    pub(crate) fn decode(input: impl Into<String>, message: impl fmt::Display) -> Self {
        Error::Decode {
            input: input.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Decode { input, message } => {
                write!(f, "Decode error for {:?}: {}", input, message)
            }
            Error::UnknownAsset(coin) => write!(f, "Unknown asset: {}", coin),
        }
    }
}

impl std::error::Error for Error {}
