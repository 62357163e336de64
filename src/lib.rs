//! Tooling behind a personal portfolio site.
//!
//! * [resume] lays a [ResumeData](resume::ResumeData) record out into a paginated A4 PDF and
//!   hands it to a [DocumentSink](resume::DocumentSink) to be saved.
//! * [contact] drives the site's contact form: field state, one form submission per
//!   submit, the timed status reset, and the `mailto:` fallback.
//!
//! The remaining modules are the small PDF document model the resume is drawn with.

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to measure, wrap and place text on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;
pub use refs::RefType;

mod units;
pub use units::*;

mod error;
pub use error::*;

pub mod contact;
pub mod resume;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
