use crate::{
    font::Font,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID. The ID stays valid for
    /// the lifetime of the document and can be used to keep drawing on the page.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Number of pages that will be written
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// Add a font to the document structure. Note that fonts are stored "globally" within
    /// the document, such that any page can access it by referring to it by its ID.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add a bookmark in the document outline pointing to the page with the given index.
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title.to_string());
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    ///
    /// Until `write` is called, all references are un-resolved. Calling `write` will
    /// generate PDF objects and corresponding references in a fixed order, so the same
    /// document always serialises to the same bytes.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            outline,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by page_order index (not arena index) so that
        // bookmarks can reference pages by their position in the document
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages
                .get(*id)
                .ok_or(PDFError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        outline.write(&mut refs, &mut writer)?;

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize::A4;
    use crate::{colours, BuiltinFont, Pt, SpanFont, SpanLayout};

    fn sample() -> Document {
        let mut doc = Document::default();
        let font = doc.add_font(Font::builtin(BuiltinFont::Helvetica));

        for n in 0..2 {
            let mut page = Page::new(A4, Some(Margins::all(Pt(42.0))));
            page.add_spans(vec![SpanLayout {
                text: format!("page {n}"),
                font: SpanFont {
                    id: font,
                    size: Pt(12.0),
                },
                colour: colours::BLACK,
                coords: (Pt(42.0), Pt(780.0)),
            }]);
            doc.add_page(page);
        }
        doc.add_bookmark("Second", 1);
        doc
    }

    #[test]
    fn writes_a_pdf_with_catalog_pages_and_outline() {
        let mut bytes = Vec::new();
        sample().write(&mut bytes).expect("can write document");

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/Outlines"));
        assert!(text.contains("(Second)"));
    }

    #[test]
    fn same_document_serialises_identically() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        sample().write(&mut a).unwrap();
        sample().write(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn page_indices_follow_insertion_order() {
        let mut doc = Document::default();
        let first = doc.add_page(Page::new(A4, None));
        let second = doc.add_page(Page::new(A4, None));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
    }
}
