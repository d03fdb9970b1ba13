//! Helvetica width metrics for line measurement.
//!
//! The report embeds the builtin Helvetica font, whose advance widths are
//! fixed by the Adobe AFM tables. Sanitized text is ASCII-only, so the
//! printable ASCII range is all the wrapper ever measures.

/// Glyph advance widths for U+0020..=U+007E in 1/1000 em units.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Fallback advance for characters outside the table.
const DEFAULT_WIDTH: u16 = 556;

#[inline]
fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - 0x20],
        _ => DEFAULT_WIDTH,
    }
}

/// Measured width in points of `text` set in Helvetica at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // space is 278/1000 em, 'W' is 944/1000 em
        assert!((text_width(" ", 1000.0) - 278.0).abs() < f32::EPSILON);
        assert!((text_width("W", 1000.0) - 944.0).abs() < f32::EPSILON);
        assert!((text_width("", 10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_width_scales_with_size() {
        let at_ten = text_width("hello", 10.0);
        let at_twenty = text_width("hello", 20.0);
        assert!((at_twenty - 2.0 * at_ten).abs() < 0.001);
    }

    #[test]
    fn test_width_is_additive_over_chars() {
        let whole = text_width("ab", 12.0);
        let parts = text_width("a", 12.0) + text_width("b", 12.0);
        assert!((whole - parts).abs() < 0.001);
    }
}
