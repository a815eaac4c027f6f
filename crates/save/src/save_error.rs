//! Error type shared by the JSON codec, the binary snapshot and layout files.

use std::fmt;

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    /// Serializing the layout document failed.
    Encode(String),
    /// JSON or bitcode that does not describe a layout document.
    Decode(String),
    /// Snapshot header is malformed or its checksum does not match.
    Corrupted(String),
    /// Document written with a newer major version.
    VersionMismatch { expected_max: u32, found: u32 },
    /// Nothing to save (no generated city) or nothing to load.
    NoData,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "layout file I/O failed: {e}"),
            SaveError::Encode(msg) => write!(f, "cannot encode layout: {msg}"),
            SaveError::Decode(msg) => write!(f, "not a valid layout document: {msg}"),
            SaveError::Corrupted(msg) => write!(f, "corrupted layout snapshot: {msg}"),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "layout document major version {found} is newer than supported {expected_max}"
            ),
            SaveError::NoData => write!(f, "no city layout to save or load"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            SaveError::Io(e.into())
        } else {
            SaveError::Decode(e.to_string())
        }
    }
}
