//! Length units used throughout the crate.
//!
//! PDF content is positioned in points ([Pt], 1/72 of an inch), with the origin at the
//! bottom-left of the page. Layout code that thinks in paper terms (the resume renderer)
//! works in millimetres ([Mm]) from the top-left and converts at the drawing boundary.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points (1/72 inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

const POINTS_PER_MM: f32 = 72.0 / 25.4;

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * POINTS_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / POINTS_PER_MM)
    }
}

macro_rules! scalar_ops {
    ($unit:ident) => {
        impl Mul<f32> for $unit {
            type Output = $unit;

            fn mul(self, rhs: f32) -> $unit {
                $unit(self.0 * rhs)
            }
        }

        impl Mul<$unit> for f32 {
            type Output = $unit;

            fn mul(self, rhs: $unit) -> $unit {
                $unit(self * rhs.0)
            }
        }

        impl Div<f32> for $unit {
            type Output = $unit;

            fn div(self, rhs: f32) -> $unit {
                $unit(self.0 / rhs)
            }
        }

        /// Dividing two lengths yields a unitless ratio
        impl Div<$unit> for $unit {
            type Output = f32;

            fn div(self, rhs: $unit) -> f32 {
                self.0 / rhs.0
            }
        }

        impl Neg for $unit {
            type Output = $unit;

            fn neg(self) -> $unit {
                $unit(-self.0)
            }
        }
    };
}

scalar_ops!(Pt);
scalar_ops!(Mm);
