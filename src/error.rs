//! Error type shared by every validation gate in this crate.

/// Error raised when tpcf inputs fail validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TpcfError {
    /// An argument value is outside its accepted set or range.
    InvalidArgument(String),
    /// A sample is not a rectangular (N, D) table of finite coordinates.
    Shape(String),
}

impl std::fmt::Display for TpcfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TpcfError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            TpcfError::Shape(msg) => write!(f, "incorrect sample shape: {msg}"),
        }
    }
}

impl std::error::Error for TpcfError {}
