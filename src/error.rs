use std::error;
use std::fmt;

/// An Error enum used throughout the crate to communicate initialisation
/// failures to the hosting application.
///
/// There are no recoverable runtime errors inside the CPU interpreter:
/// every opcode pattern is defined, and out-of-range memory accesses are
/// architecturally silent (reads return the undefined byte, writes are
/// discarded).
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A ROM image file could not be opened or read
    RomFile { path: String },
    /// The requested RAM size is not one the machine supports
    InvalidRamSize { size: usize },
    /// An options file could not be read, written or parsed
    OptionsFile { path: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    /// Returns a textual description of each enum variant for display
    /// purposes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RomFile { path } => {
                write!(f, "could not read ROM image `{}`", path)
            }
            Error::InvalidRamSize { size } => {
                write!(
                    f,
                    "unsupported RAM size {} (expected a power of two no larger than 65536 bytes)",
                    size
                )
            }
            Error::OptionsFile { path } => {
                write!(f, "could not load or save options file `{}`", path)
            }
        }
    }
}
