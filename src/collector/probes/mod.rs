//! Individual probe groups for the device snapshot.
//!
//! Each probe queries one independent OS subsystem and yields one group of
//! snapshot fields. Probes return `Result` so the aggregator can substitute
//! the group's fallback values on failure without affecting other groups.

pub mod app;
pub mod display;
pub mod memory;
pub mod network;
pub mod os;
pub mod parser;
pub mod storage;

pub use display::DisplayProvider;

/// Error type for probe failures.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading an OS attribute.
    Io(std::io::Error),
    /// Attribute file was readable but malformed.
    Parse(String),
    /// The queried subsystem is absent on this host.
    Unavailable(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
            CollectError::Unavailable(msg) => write!(f, "unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<parser::ParseError> for CollectError {
    fn from(e: parser::ParseError) -> Self {
        CollectError::Parse(e.message)
    }
}
