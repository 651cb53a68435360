//! Approximate text measurement.
//!
//! The renderer emits generic sans-serif text and ships no font data,
//! so metrics are estimated from per-class glyph advances. The
//! estimates only drive margin and layout decisions; the viewer's font
//! does the actual shaping.

use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width of one character as a fraction of the font size.
fn advance(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '\'' | '.' | ',' | ':' | ';' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | ' ' => 0.36,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        'A'..='Z' => 0.68,
        '0'..='9' => 0.56,
        _ => 0.52,
    }
}

/// Measure text width and height in points.
pub fn measure_text(content: &str, style: &TextStyle) -> TextMetrics {
    let bold = if style.weight == FontWeight::Bold { 1.05 } else { 1.0 };
    let width: f64 = content.chars().map(advance).sum::<f64>() * style.size * bold;
    let ascent = style.size * 0.8;
    TextMetrics { width, height: style.size * 1.2, ascent }
}
