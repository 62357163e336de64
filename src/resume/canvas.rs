//! A drawing surface over [Document] that speaks in paper terms: millimetres measured
//! from the top-left corner of the current page, with text baselines at `y`.

use crate::layout::{layout_lines, wrap_text, Margins};
use crate::pagesize::PageSize;
use crate::{
    BuiltinFont, Colour, Document, FillLayout, Font, Info, Mm, OutlineEntry, PDFError, Page,
    Pt, Rect, SpanFont,
};
use id_arena::Id;

/// Baseline-to-baseline distance of consecutive lines within one text block, as a
/// multiple of the font size
const LINE_HEIGHT_FACTOR: f32 = 1.15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

/// Everything needed to draw a run of text
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontStyle,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: FontStyle, size: f32, colour: Colour) -> TextStyle {
        TextStyle {
            font,
            size: Pt(size),
            colour,
        }
    }
}

struct Faces {
    normal: Id<Font>,
    bold: Id<Font>,
    italic: Id<Font>,
}

pub struct Canvas {
    doc: Document,
    faces: Faces,
    size: PageSize,
    margins: Margins,
    current: Id<Page>,
}

impl Canvas {
    /// Starts a document with a single blank page
    pub fn new(size: PageSize, margin: Mm) -> Canvas {
        let mut doc = Document::default();
        let faces = Faces {
            normal: doc.add_font(Font::builtin(BuiltinFont::Helvetica)),
            bold: doc.add_font(Font::builtin(BuiltinFont::HelveticaBold)),
            italic: doc.add_font(Font::builtin(BuiltinFont::HelveticaOblique)),
        };
        let margins = Margins::all(margin.into());
        let current = doc.add_page(Page::new(size, Some(margins)));

        Canvas {
            doc,
            faces,
            size,
            margins,
            current,
        }
    }

    pub fn page_width(&self) -> Mm {
        self.size.0.into()
    }

    pub fn page_height(&self) -> Mm {
        self.size.1.into()
    }

    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    /// 0-based index of the page currently being drawn on
    pub fn page_index(&self) -> usize {
        self.doc.page_count() - 1
    }

    /// Starts a new page; everything drawn from now on lands there
    pub fn add_page(&mut self) {
        self.current = self
            .doc
            .add_page(Page::new(self.size, Some(self.margins)));
    }

    pub fn fill_rect(&mut self, x: Mm, y: Mm, width: Mm, height: Mm, colour: Colour) {
        let (left, top) = self.to_page(x, y);
        let rect = Rect::hanging(left, top, width.into(), height.into());
        self.doc.pages[self.current].add_fill(FillLayout { rect, colour });
    }

    /// Draws a single line of text with its baseline at `y`, without wrapping
    pub fn text(&mut self, text: &str, x: Mm, y: Mm, style: TextStyle) {
        self.text_lines(&[text.to_string()], x, y, style);
    }

    /// Draws pre-split lines, the first baseline at `y`
    pub fn text_lines(&mut self, lines: &[String], x: Mm, y: Mm, style: TextStyle) {
        let font = SpanFont {
            id: self.face(style.font),
            size: style.size,
        };
        let start = self.to_page(x, y);
        let line_gap = style.size * LINE_HEIGHT_FACTOR;
        layout_lines(
            &mut self.doc.pages[self.current],
            lines,
            font,
            style.colour,
            start,
            line_gap,
        );
    }

    /// Splits text into lines no wider than `max_width` in the given style
    pub fn split_text(&self, text: &str, max_width: Mm, style: TextStyle) -> Vec<String> {
        let font = &self.doc.fonts[self.face(style.font)];
        wrap_text(text, font, style.size, max_width.into())
    }

    /// Adds a bookmark pointing at the current page
    pub fn bookmark(&mut self, title: &str) {
        let index = self.page_index();
        self.doc.add_bookmark(title, index);
    }

    pub fn bookmarks(&self) -> &[OutlineEntry] {
        &self.doc.outline.entries
    }

    /// Serialises every page drawn so far
    pub fn finish(mut self, info: Info) -> Result<Vec<u8>, PDFError> {
        self.doc.set_info(info);
        let mut bytes = Vec::new();
        self.doc.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Text drawn on each page, in drawing order
    #[cfg(test)]
    pub fn page_texts(&self) -> Vec<Vec<String>> {
        self.doc
            .page_order
            .iter()
            .map(|&id| {
                self.doc.pages[id]
                    .spans()
                    .map(|span| span.text.clone())
                    .collect()
            })
            .collect()
    }

    /// Style of the first span drawn with exactly this text
    #[cfg(test)]
    pub fn style_of(&self, text: &str) -> Option<TextStyle> {
        let span = self
            .doc
            .page_order
            .iter()
            .flat_map(|&id| self.doc.pages[id].spans())
            .find(|span| span.text == text)?;
        let font = [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic]
            .into_iter()
            .find(|&style| self.face(style) == span.font.id)?;
        Some(TextStyle {
            font,
            size: span.font.size,
            colour: span.colour,
        })
    }

    fn face(&self, style: FontStyle) -> Id<Font> {
        match style {
            FontStyle::Normal => self.faces.normal,
            FontStyle::Bold => self.faces.bold,
            FontStyle::Italic => self.faces.italic,
        }
    }

    /// PDF space has its origin at the bottom-left, in points
    fn to_page(&self, x: Mm, y: Mm) -> (Pt, Pt) {
        let y: Pt = y.into();
        (x.into(), self.size.1 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::pagesize::A4;

    #[test]
    fn starts_with_one_page_and_counts_new_ones() {
        let mut canvas = Canvas::new(A4, Mm(15.0));
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.page_index(), 0);

        canvas.add_page();
        canvas.bookmark("Second");
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.bookmarks()[0].page_index, 1);
    }

    #[test]
    fn draws_on_the_current_page_only() {
        let mut canvas = Canvas::new(A4, Mm(15.0));
        let style = TextStyle::new(FontStyle::Normal, 10.0, colours::BLACK);
        canvas.text("first", Mm(15.0), Mm(20.0), style);
        canvas.add_page();
        canvas.text("second", Mm(15.0), Mm(20.0), style);

        assert_eq!(
            canvas.page_texts(),
            vec![vec!["first".to_string()], vec!["second".to_string()]]
        );
    }

    #[test]
    fn page_dimensions_are_a4() {
        let canvas = Canvas::new(A4, Mm(15.0));
        assert!((canvas.page_width().0 - 210.0).abs() < 0.001);
        assert!((canvas.page_height().0 - 297.0).abs() < 0.001);
    }
}
