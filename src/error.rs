//! Error taxonomy for building and writing packed documents.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackError>;

/// Errors raised while building or writing a packed document.
#[derive(Debug, Error)]
pub enum PackError {
    /// An entry carried neither a static nor a dynamic analysis result.
    #[error("method entry {index} has neither a static nor a dynamic result")]
    EmptyEntry { index: usize },

    /// The destination could not be opened, written or flushed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Text was written or an element closed while none was open.
    #[error("no element is open")]
    NoOpenElement,

    /// Text holds a character XML 1.0 cannot carry.
    #[error("character {ch:?} is not allowed in XML text")]
    InvalidChar { ch: char },

    /// The document was finished with elements still open.
    #[error("document finished with unclosed elements: {open:?}")]
    Unbalanced { open: Vec<&'static str> },

    /// The JSON hand-off from the analysers is malformed.
    #[error("malformed method entries: {0}")]
    Input(#[from] serde_json::Error),
}
