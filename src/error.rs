/// Errors that can occur while configuring the engine or parsing a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized collision policy name
    InvalidPolicy,
    /// Invalid port number
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPolicy => "Invalid collision policy",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for fallible engine operations
pub type Result<T> = core::result::Result<T, ParseError>;
