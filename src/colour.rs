use pdf_writer::Content;

/// A fill colour, expressed in the RGB or Grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Select this colour as the non-stroking (fill) colour of a content stream.
    /// Text is painted with the fill colour too.
    pub(crate) fn apply_fill(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => {
                content.set_fill_rgb(r, g, b);
            }
            Colour::Grey { g } => {
                content.set_fill_gray(g);
            }
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_triples_are_normalised() {
        let accent: Colour = (59, 130, 246).into();
        match accent {
            Colour::RGB { r, g, b } => {
                assert!((r - 59.0 / 255.0).abs() < f32::EPSILON);
                assert!((g - 130.0 / 255.0).abs() < f32::EPSILON);
                assert!((b - 246.0 / 255.0).abs() < f32::EPSILON);
            }
            other => panic!("expected an RGB colour, got {other:?}"),
        }
    }
}
