//! Text measurement and wrapping utilities for positioning content on pages.
//!
//! Text is measured with the advance widths of the page font, and wrapped greedily on
//! whitespace: as many words as fit go on a line, and a word that is wider than a whole
//! line on its own is split between characters so nothing ever overflows the box.
//!
//! # Example
//!
//! ```
//! use portfolio::{BuiltinFont, Font, Pt};
//! use portfolio::layout::{width_of_text, wrap_text};
//!
//! let font = Font::builtin(BuiltinFont::Helvetica);
//! let lines = wrap_text("the quick brown fox jumps over the lazy dog", &font, Pt(12.0), Pt(100.0));
//!
//! assert!(lines.len() > 1);
//! for line in &lines {
//!     assert!(width_of_text(line, &font, Pt(12.0)) <= Pt(100.0));
//! }
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
