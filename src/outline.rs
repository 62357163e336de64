use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use pdf_writer::{Finish, Pdf, TextStr};

/// The document outline ("bookmarks"), a flat list of entries each pointing at a page
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String) {
        self.entries.push(OutlineEntry { page_index, title });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the outline root and its items. Nothing is written if there are no bookmarks,
    /// in which case no outline is referenced from the catalog.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        if self.entries.is_empty() {
            return Ok(());
        }

        // generate IDs for everything up front so items can link to their siblings
        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(item_ids[0]);
        outline.last(item_ids[item_ids.len() - 1]);
        outline.count(item_ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let page_id = refs
                .get(RefType::Page(entry.page_index))
                .ok_or(PDFError::MissingReference(RefType::Page(entry.page_index)))?;

            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(&next) = item_ids.get(i + 1) {
                item.next(next);
            }
            item.dest().page(page_id).fit();
        }

        Ok(())
    }
}
