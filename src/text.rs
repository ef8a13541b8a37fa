//! Text measurement and wrapping against the built-in Helvetica metrics.
//!
//! The renderer only ever uses the PDF Base-14 Helvetica family, so the
//! standard AFM advance widths are compiled in and no font file is read at
//! runtime. Widths are expressed in 1/1000 of the font size; conversion to
//! layout units (millimetres) goes through the usual 72 pt per inch.

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Advance width applied to characters outside the table, matching the
/// width of most Latin lowercase glyphs.
const DEFAULT_WIDTH: u16 = 556;

/// AFM advance widths for Helvetica (regular), ASCII 32..=126.
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

fn glyph_width(ch: char) -> u16 {
    // Accented Latin letters measure like their base letter closely enough
    // for single-line fitting; anything unknown gets the default width.
    let base = match ch {
        'á' | 'à' | 'ä' => 'a',
        'é' | 'è' | 'ë' => 'e',
        'í' | 'ì' | 'ï' => 'i',
        'ó' | 'ò' | 'ö' => 'o',
        'ú' | 'ù' | 'ü' => 'u',
        'ñ' => 'n',
        'Á' | 'À' | 'Ä' => 'A',
        'É' | 'È' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Ü' => 'U',
        'Ñ' => 'N',
        other => other,
    };
    let code = base as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Measures the rendered width of `text` at `size` points, in millimetres.
pub fn width_mm(text: &str, size: f64) -> f64 {
    let millis: u32 = text.chars().map(|ch| u32::from(glyph_width(ch))).sum();
    f64::from(millis) / 1000.0 * size * MM_PER_PT
}

/// Greedily wraps `text` into lines no wider than `max_mm` at `size` points.
///
/// Words longer than a full line are hard-split at the character that would
/// overflow. Always returns at least one line so downstream cursor math can
/// rely on `lines.len() >= 1`.
pub fn wrap(text: &str, size: f64, max_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if width_mm(&candidate, size) <= max_mm {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if width_mm(word, size) <= max_mm {
            current = word.to_string();
        } else {
            split_long_word(word, size, max_mm, &mut lines, &mut current);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long_word(
    word: &str,
    size: f64,
    max_mm: f64,
    lines: &mut Vec<String>,
    current: &mut String,
) {
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if width_mm(&piece, size) > max_mm && piece.chars().count() > 1 {
            piece.pop();
            lines.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    *current = piece;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_size() {
        let narrow = width_mm("iii", 10.0);
        let wide = width_mm("MMM", 10.0);
        assert!(narrow < wide);
        assert!((width_mm("abc", 20.0) - 2.0 * width_mm("abc", 10.0)).abs() < 1e-9);
    }

    #[test]
    fn accented_letters_measure_like_their_base() {
        assert_eq!(width_mm("ñ", 10.0), width_mm("n", 10.0));
        assert_eq!(width_mm("É", 10.0), width_mm("E", 10.0));
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hola mundo", 10.0, 170.0), vec!["hola mundo"]);
    }

    #[test]
    fn long_text_wraps_within_limit() {
        let text = "renovación anual de licencias de software para los equipos \
                    de recepción y del centro de negocios del hotel";
        let lines = wrap(text, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(width_mm(line, 10.0) <= 60.0, "line too wide: {line}");
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn oversized_word_is_hard_split() {
        let lines = wrap("Supercalifragilisticoexpialidoso", 10.0, 20.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(width_mm(line, 10.0) <= 20.0);
        }
    }

    #[test]
    fn empty_text_yields_a_single_empty_line() {
        assert_eq!(wrap("   ", 10.0, 100.0), vec![String::new()]);
    }
}
