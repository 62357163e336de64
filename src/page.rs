use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text drawn on one baseline in one font and colour
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Baseline origin of the first glyph, in page coordinates
    pub coords: (Pt, Pt),
}

/// A solid rectangle, e.g. a header band behind text
#[derive(Clone, PartialEq, Debug)]
pub struct FillLayout {
    pub rect: Rect,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Fill(FillLayout),
}

#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents, painted in order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new, empty page. When no margins are given the content box covers
    /// the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let media_box = Rect::hanging(Pt(0.0), height, width, height);
        Page {
            media_box,
            content_box: margins.unwrap_or_default().inset(media_box),
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_spans(&mut self, spans: Vec<SpanLayout>) {
        self.contents.push(PageContents::Text(spans));
    }

    pub fn add_fill(&mut self, fill: FillLayout) {
        self.contents.push(PageContents::Fill(fill));
    }

    /// All text spans on the page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => Some(spans),
                PageContents::Fill(_) => None,
            })
            .flatten()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::MissingReference(RefType::Page(page_index)))?;
        let page_tree_id = refs
            .get(RefType::PageTree)
            .ok_or(PDFError::MissingReference(RefType::PageTree))?;

        let mut font_refs = Vec::with_capacity(fonts.len());
        for (font_id, _) in fonts.iter() {
            let r = refs
                .get(RefType::Font(font_id.index()))
                .ok_or(PDFError::MissingReference(RefType::Font(font_id.index())))?;
            font_refs.push((font_id.index(), r));
        }

        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (index, r) in font_refs {
            resource_fonts.pair(Name(format!("F{index}").as_bytes()), r);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rendered, 6);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::Mm;

    #[test]
    fn margins_shrink_the_content_box() {
        let page = Page::new(A4, Some(Margins::all(Mm(15.0).into())));
        let margin: Pt = Mm(15.0).into();

        assert_eq!(page.width(), A4.0);
        assert_eq!(page.height(), A4.1);
        assert_eq!(page.content_box.x1, margin);
        assert_eq!(page.content_box.y2, A4.1 - margin);
    }
}
