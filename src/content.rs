//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{FillLayout, PageContents, SpanFont, SpanLayout};
use id_arena::Arena;
use pdf_writer::{Content, Name, Str};

/// Renders page contents to an (uncompressed) PDF content stream, converting the
/// high-level content items into low-level PDF operators.
pub(crate) fn render_contents(contents: &[PageContents], fonts: &Arena<Font>) -> Vec<u8> {
    let mut content = Content::new();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts),
            PageContents::Fill(fill) => render_fill(&mut content, fill),
        }
    }

    content.finish()
}

fn render_fill(content: &mut Content, fill: &FillLayout) {
    let FillLayout { rect, colour } = fill;
    content.save_state();
    colour.apply_fill(content);
    content.rect(rect.x1.0, rect.y1.0, rect.width().0, rect.height().0);
    content.fill_nonzero();
    content.restore_state();
}

fn render_text_spans(content: &mut Content, spans: &[SpanLayout], fonts: &Arena<Font>) {
    if spans.is_empty() {
        return;
    }

    content.save_state();
    content.begin_text();

    // font and colour are only re-selected when they change between spans
    let mut current_font: Option<SpanFont> = None;
    let mut current_colour: Option<Colour> = None;

    for span in spans.iter() {
        if current_font != Some(span.font) {
            content.set_font(
                Name(format!("F{}", span.font.id.index()).as_bytes()),
                span.font.size.0,
            );
            current_font = Some(span.font);
        }
        if current_colour != Some(span.colour) {
            span.colour.apply_fill(content);
            current_colour = Some(span.colour);
        }

        let (x, y) = span.coords;
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x.0, y.0]);
        content.show(Str(&fonts[span.font.id].encode(&span.text)));
    }

    content.end_text();
    content.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFont;
    use crate::rect::Rect;
    use crate::units::Pt;

    #[test]
    fn renders_fills_and_text_operators() {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::builtin(BuiltinFont::HelveticaBold));

        let contents = vec![
            PageContents::Fill(FillLayout {
                rect: Rect {
                    x1: Pt(0.0),
                    y1: Pt(700.0),
                    x2: Pt(595.0),
                    y2: Pt(842.0),
                },
                colour: Colour::new_rgb(0.0, 0.0, 1.0),
            }),
            PageContents::Text(vec![SpanLayout {
                text: "Hi (there)".to_string(),
                font: SpanFont { id, size: Pt(24.0) },
                colour: crate::colours::WHITE,
                coords: (Pt(42.0), Pt(785.0)),
            }]),
        ];

        let rendered = String::from_utf8(render_contents(&contents, &fonts)).unwrap();
        assert!(rendered.contains("re"));
        assert!(rendered.contains("/F0 24 Tf"));
        assert!(rendered.contains("1 g"));
        assert!(rendered.contains("Tj"));
        assert!(rendered.contains("Hi \\(there\\)"));
    }
}
