//! The downloadable resume: a [ResumeData] record laid out on A4 pages by
//! [ResumeRenderer] and handed to a [DocumentSink].

mod canvas;
mod data;
mod render;
mod sink;

pub use data::*;
pub use render::{generate_document, RenderedResume, ResumeRenderer, Section};
pub use sink::*;

use crate::PDFError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("failed to build the PDF: {0}")]
    Pdf(#[from] PDFError),

    #[error("failed to read resume data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed resume data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("skill {skill:?} has level {level}, levels are percentages (0 to 100)")]
    InvalidSkillLevel { skill: String, level: u8 },

    #[error("failed to save the resume: {0}")]
    Save(#[source] std::io::Error),
}
