//! Paper sizes, portrait, as `(width, height)` in points.
//!
//! ```
//! use portfolio::pagesize::A4;
//! use portfolio::Mm;
//!
//! let width: Mm = A4.0.into();
//! let height: Mm = A4.1.into();
//! assert!((width.0 - 210.0).abs() < 0.001);
//! assert!((height.0 - 297.0).abs() < 0.001);
//! ```

use crate::units::Pt;

pub type PageSize = (Pt, Pt);

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// ISO 216 A4, 210 × 297 mm
pub const A4: PageSize = (Pt(210.0 * POINTS_PER_MM), Pt(297.0 * POINTS_PER_MM));
