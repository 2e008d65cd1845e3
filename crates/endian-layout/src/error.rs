/// All errors that can occur while encoding, decoding, or viewing byte buffers.
#[derive(Debug)]
pub enum Error {
    /// An element or region was requested past the end of a view.
    IndexOutOfRange {
        /// First index that was out of bounds.
        index: usize,
        /// Declared length of the view.
        len: usize,
    },
    /// A buffer was too short to hold or supply a full record.
    UnexpectedEof,
    /// A field type name in a layout string was not recognized.
    InvalidFieldType,
    /// A layout had no fields.
    InvalidLayout,
    /// A byte order name was not recognized.
    InvalidByteOrder,
    /// An I/O error from the standard library.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is an [`Error::IndexOutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::UnexpectedEof => write!(f, "unexpected end of buffer"),
            Error::InvalidFieldType => write!(f, "invalid field type"),
            Error::InvalidLayout => write!(f, "layout has no fields"),
            Error::InvalidByteOrder => write!(f, "invalid byte order"),
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(e)
        }
    }
}
