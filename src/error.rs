use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Catalog JSON could not be parsed.
    Catalog(String),
    /// No selection carries a usable positive quantity.
    InvalidSelection,
    UnknownProduct(String),
    /// The barcode encoder rejected or failed on a payload.
    Barcode(String),
    Pdf(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Catalog(msg) => write!(f, "Invalid catalog: {msg}"),
            Error::InvalidSelection => {
                write!(f, "Please enter a quantity in at least one input field")
            }
            Error::UnknownProduct(id) => write!(f, "Unknown product id: {id}"),
            Error::Barcode(msg) => write!(f, "Barcode encoding failed: {msg}"),
            Error::Pdf(msg) => write!(f, "PDF generation failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Catalog(e.to_string())
    }
}
