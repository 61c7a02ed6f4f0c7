//! Plain-text renderings of a deck.

use crate::slides::Deck;

/// All slides, separated by one blank line.
pub fn render_text(deck: &Deck) -> String {
    let mut out = String::new();
    for (index, slide) in deck.slides.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        push_lines(&mut out, &slide.lines);
    }
    out
}

/// Each slide preceded by a `--- Slide N ---` header, numbered from 1.
pub fn render_text_per_slide(deck: &Deck) -> String {
    let mut out = String::new();
    for (index, slide) in deck.slides.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("--- Slide {} ---\n", index + 1));
        push_lines(&mut out, &slide.lines);
    }
    out
}

fn push_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}
