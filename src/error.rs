use crate::refs::RefType;
use thiserror::Error;

/// All errors that the PDF document layer can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("no object reference was generated for {0:?}")]
    /// An object refers to another object that was never written
    MissingReference(RefType),

    #[error("page {0} is not part of the document")]
    /// The page order refers to a page that has been removed from the arena
    PageMissing(usize),
}
