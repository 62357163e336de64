use crate::rect::Rect;
use crate::units::Pt;

/// Blank space kept clear around a page's content. Nothing enforces it; layout code
/// reads it, and pages record the box it leaves as their `ArtBox`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// The same margin on every side
    pub fn all(value: Pt) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// What is left of `outer` once the margins are taken off
    pub fn inset(&self, outer: Rect) -> Rect {
        Rect {
            x1: outer.x1 + self.left,
            y1: outer.y1 + self.bottom,
            x2: outer.x2 - self.right,
            y2: outer.y2 - self.top,
        }
    }
}
