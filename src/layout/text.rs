use crate::colour::Colour;
use crate::font::Font;
use crate::page::*;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    text.chars().map(|ch| font.char_width(ch, size)).sum()
}

/// Splits text into lines that each fit within `max_width` when set in `font` at `size`.
///
/// # Wrapping Behavior
///
/// Explicit newlines always start a new line (an empty paragraph yields an empty line).
/// Within a paragraph, runs of whitespace collapse to a single space and lines break
/// at those spaces. A word that is wider than `max_width` by itself is broken between
/// characters, filling each line as far as it will go.
///
/// The result always holds at least one line, so an empty string measures as one
/// (blank) line, which is what the cursor arithmetic of callers expects.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if !line.is_empty() {
                let candidate = format!("{line} {word}");
                if width_of_text(&candidate, font, size) <= max_width {
                    line = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut line));
            }

            if width_of_text(word, font, size) <= max_width {
                line.push_str(word);
            } else {
                let (head, tail) = break_word(word, font, size, max_width);
                lines.extend(head);
                line = tail;
            }
        }

        lines.push(line);
    }

    lines
}

/// Character-level fallback for words with no break point: returns the full lines and
/// whatever is left over, which later words may still join.
fn break_word(word: &str, font: &Font, size: Pt, max_width: Pt) -> (Vec<String>, String) {
    let mut full: Vec<String> = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = Pt(0.0);

    for ch in word.chars() {
        let hadv = font.char_width(ch, size);
        // always keep at least one character per line or we'd never make progress
        if !chunk.is_empty() && chunk_width + hadv > max_width {
            full.push(std::mem::take(&mut chunk));
            chunk_width = Pt(0.0);
        }
        chunk.push(ch);
        chunk_width += hadv;
    }

    (full, chunk)
}

/// Places already-wrapped lines on a page, the first baseline at `start` and each
/// following one `line_gap` lower. Blank lines take up their space but emit no span.
///
/// Returns the baseline coordinates following the last line.
pub fn layout_lines(
    page: &mut Page,
    lines: &[String],
    font: SpanFont,
    colour: Colour,
    start: (Pt, Pt),
    line_gap: Pt,
) -> (Pt, Pt) {
    let (x, mut y) = start;
    let mut spans: Vec<SpanLayout> = Vec::with_capacity(lines.len());

    for line in lines {
        if !line.is_empty() {
            spans.push(SpanLayout {
                text: line.clone(),
                font,
                colour,
                coords: (x, y),
            });
        }
        y -= line_gap;
    }

    if !spans.is_empty() {
        page.add_spans(spans);
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFont;
    use pretty_assertions::assert_eq;

    fn helvetica() -> Font {
        Font::builtin(BuiltinFont::Helvetica)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Docker (90%)", &helvetica(), Pt(10.0), Pt(500.0));
        assert_eq!(lines, vec!["Docker (90%)".to_string()]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        let lines = wrap_text("", &helvetica(), Pt(10.0), Pt(500.0));
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn wraps_at_whitespace_within_width() {
        let font = helvetica();
        let text = lipsum::lipsum(60);
        let max = Pt(200.0);
        let lines = wrap_text(&text, &font, Pt(10.0), max);

        assert!(lines.len() > 3);
        for line in &lines {
            assert!(width_of_text(line, &font, Pt(10.0)) <= max, "{line:?} overflows");
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        // wrapping only ever replaces whitespace runs
        assert_eq!(
            lines.join(" "),
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        );
    }

    #[test]
    fn newlines_start_new_lines() {
        let lines = wrap_text("one\r\n\ntwo", &helvetica(), Pt(10.0), Pt(500.0));
        assert_eq!(lines, vec!["one".to_string(), String::new(), "two".to_string()]);
    }

    #[test]
    fn overlong_words_are_split_by_character() {
        let font = helvetica();
        let word = "x".repeat(100);
        let max = Pt(50.0);
        let lines = wrap_text(&word, &font, Pt(10.0), max);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(width_of_text(line, &font, Pt(10.0)) <= max);
        }
    }

    #[test]
    fn wider_text_needs_more_lines() {
        let font = helvetica();
        let short = wrap_text("• Collaborated with teams", &font, Pt(10.0), Pt(480.0));
        let long = wrap_text(&lipsum::lipsum(40), &font, Pt(10.0), Pt(480.0));
        assert_eq!(short.len(), 1);
        assert!(long.len() > short.len());
    }
}
