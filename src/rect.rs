use crate::units::Pt;

/// An axis-aligned box in PDF page space, where `(x1, y1)` is the bottom-left corner
/// and `(x2, y2)` the top-right one
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// A box of the given size hanging down from its top-left corner
    pub fn hanging(left: Pt, top: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: left,
            y1: top - height,
            x2: left + width,
            y2: top,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect::new(r.x1.0, r.y1.0, r.x2.0, r.y2.0)
    }
}
