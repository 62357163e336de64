use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// Glyph space units per em for the standard 14 fonts
const UNITS_PER_EM: f32 = 1000.0;

/// The faces of the Helvetica family that every PDF viewer ships (part of the
/// "standard 14" fonts), so nothing has to be embedded in the document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl BuiltinFont {
    /// The PostScript name the font is referenced by in the PDF
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// A font available to pages of a document. Fonts are stored "globally" within the
/// document and referred to by their [Id] from text spans.
///
/// Text is encoded with WinAnsiEncoding; characters that have no code in that encoding
/// are replaced by `?` both when measuring and when drawing, so measurements always match
/// what ends up on the page.
#[derive(Debug, Clone)]
pub struct Font {
    pub face: BuiltinFont,
}

impl Font {
    pub fn builtin(face: BuiltinFont) -> Font {
        Font { face }
    }

    /// Obtain the PostScript name of the font
    pub fn name(&self) -> &'static str {
        self.face.base_name()
    }

    /// Horizontal advance of a single character at the given size
    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        size * (self.advance(win_ansi_code(ch)) as f32 / UNITS_PER_EM)
    }

    fn advance(&self, code: u8) -> u16 {
        match code {
            0x20..=0x7e => self.face.widths()[(code - 0x20) as usize],
            _ => SPECIAL_GLYPHS
                .iter()
                .find(|&&(_, c, _)| c == code)
                .map(|&(_, _, width)| width)
                .unwrap_or(LATIN1_FALLBACK_WIDTH),
        }
    }

    /// Encode text into the single-byte string the content stream shows
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(win_ansi_code).collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.face.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}


/// Used for the Latin-1 supplement, whose per-glyph metrics we don't carry
const LATIN1_FALLBACK_WIDTH: u16 = 556;

/// Characters outside printable ASCII that WinAnsiEncoding places in 0x80..=0x9f:
/// (character, code, advance)
const SPECIAL_GLYPHS: [(char, u8, u16); 10] = [
    ('€', 0x80, 556),
    ('…', 0x85, 1000),
    ('‘', 0x91, 222),
    ('’', 0x92, 222),
    ('“', 0x93, 333),
    ('”', 0x94, 333),
    ('•', 0x95, 350),
    ('–', 0x96, 556),
    ('—', 0x97, 1000),
    ('™', 0x99, 1000),
];

fn win_ansi_code(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        _ => SPECIAL_GLYPHS
            .iter()
            .find(|&&(c, _, _)| c == ch)
            .map(|&(_, code, _)| code)
            .unwrap_or(b'?'),
    }
}

// Advance widths from the Adobe AFM files, indexed by `code - 0x20` (space through tilde)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = Font::builtin(BuiltinFont::Helvetica);
        let bold = Font::builtin(BuiltinFont::HelveticaBold);
        let size = Pt(10.0);

        assert!((regular.char_width('i', size).0 - 2.22).abs() < 1e-4);
        assert!((bold.char_width('i', size).0 - 2.78).abs() < 1e-4);
        assert_eq!(regular.char_width(' ', size), bold.char_width(' ', size));
    }

    #[test]
    fn encodes_bullets_and_replaces_unmapped_characters() {
        let font = Font::builtin(BuiltinFont::Helvetica);
        assert_eq!(font.encode("• a"), vec![0x95, b' ', b'a']);
        assert_eq!(font.encode("📧 é"), vec![b'?', b' ', 0xe9]);
        assert_eq!(font.char_width('📧', Pt(10.0)), font.char_width('?', Pt(10.0)));
    }
}
