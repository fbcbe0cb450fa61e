// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::io::Error as IOError;
use std::error::Error;


// Bitmap Error Abstraction ---------------------------------------------------
#[derive(Debug, Eq, PartialEq)]
pub struct FormatError {
    pub field: &'static str,
    pub message: String
}

impl FormatError {

    pub fn new<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self {
            field,
            message: message.into()
        }
    }

}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid bitmap {}: {}", self.field, self.message)
    }
}

impl Error for FormatError {}

/// The input ended before `stage` could be read completely.
#[derive(Debug, Eq, PartialEq)]
pub struct TruncatedInputError {
    pub stage: String,
    pub offset: usize
}

impl TruncatedInputError {

    pub fn new<S: Into<String>>(stage: S, offset: usize) -> Self {
        Self {
            stage: stage.into(),
            offset
        }
    }

}

impl fmt::Display for TruncatedInputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unexpected end of bitmap data while reading {} (at byte offset {})", self.stage, self.offset)
    }
}

impl Error for TruncatedInputError {}


// Conversion Error -----------------------------------------------------------
#[derive(Debug)]
pub enum ConversionError {
    Format(FormatError),
    Truncated(TruncatedInputError),
    Io(IOError)
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::Format(err) => write!(f, "{}", err),
            ConversionError::Truncated(err) => write!(f, "{}", err),
            ConversionError::Io(err) => write!(f, "Failed to read bitmap data: {}", err)
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConversionError::Format(err) => Some(err),
            ConversionError::Truncated(err) => Some(err),
            ConversionError::Io(err) => Some(err)
        }
    }
}

impl From<FormatError> for ConversionError {
    fn from(err: FormatError) -> Self {
        ConversionError::Format(err)
    }
}

impl From<TruncatedInputError> for ConversionError {
    fn from(err: TruncatedInputError) -> Self {
        ConversionError::Truncated(err)
    }
}
