use crate::fonts::FontFace;

/// Greedy whitespace wrapping using `measure` for line widths.
///
/// Words are appended to the current line while the joined line fits in
/// `max_width`. A word that does not fit starts a new line; a word wider than
/// `max_width` on its own still gets a line to itself.
pub fn wrap_with<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if measure(&candidate) > max_width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = word.to_string();
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wraps `text` set in `font` at `size` points to `max_width`.
pub fn wrap_text(text: &str, font: &FontFace, size: f32, max_width: f32) -> Vec<String> {
    wrap_with(text, max_width, |s| font.text_width(s, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_count(s: &str) -> f32 {
        s.chars().count() as f32
    }

    const SAMPLE: &str = "Every project is requested by the community it serves, verified by \
        on-the-ground NGO partners, and funded in full.";

    #[test]
    fn empty_and_blank_text_produce_no_lines() {
        assert!(wrap_with("", 100.0, char_count).is_empty());
        assert!(wrap_with("   \n\t ", 100.0, char_count).is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_with("  Fund a   project ", 100.0, char_count);
        assert_eq!(lines, vec!["Fund a project"]);
    }

    #[test]
    fn greedy_breaks_at_whitespace() {
        let lines = wrap_with("aaa bbb ccc ddd", 7.0, char_count);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_with("a thermo-modernization b", 5.0, char_count);
        assert_eq!(lines, vec!["a", "thermo-modernization", "b"]);
    }

    #[test]
    fn lines_fit_or_are_single_words() {
        for max in [10.0, 24.0, 40.0, 80.0] {
            for line in wrap_with(SAMPLE, max, char_count) {
                assert!(
                    char_count(&line) <= max || !line.contains(' '),
                    "line {:?} exceeds {}",
                    line,
                    max
                );
            }
        }
    }

    #[test]
    fn wrapping_preserves_word_sequence() {
        let font = FontFace::HELVETICA;
        for max in [60.0, 150.0, 504.0] {
            let lines = wrap_text(SAMPLE, &font, 9.5, max);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: Vec<&str> = SAMPLE.split_whitespace().collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn measured_lines_respect_width() {
        let font = FontFace::HELVETICA_BOLD;
        let max = 200.0;
        let lines = wrap_text(SAMPLE, &font, 10.0, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.text_width(line, 10.0) <= max || !line.contains(' '));
        }
    }
}
