//! Built-in metrics for the standard PDF base fonts.
//!
//! Widths are in 1/1000 em, indexed by WinAnsi code. Only the two faces the
//! fallback font set needs are carried.

/// Advance widths for codes 0x20..=0x7E.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

const DEFAULT_WIDTH: u16 = 556;

/// Standard Type1 faces that every PDF viewer provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Width of a WinAnsi code in 1/1000 em.
    pub fn code_width(&self, code: u8) -> u16 {
        let bold = matches!(self, StandardFont::HelveticaBold);
        match code {
            0x20..=0x7E => {
                let idx = (code - 0x20) as usize;
                if bold {
                    HELVETICA_BOLD_ASCII[idx]
                } else {
                    HELVETICA_ASCII[idx]
                }
            }
            0x85 | 0x97 | 0x99 => 1000,
            0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0x95 => 350,
            0xA0 | 0xB7 => 278,
            0xA9 | 0xAE => 737,
            0xB0 => 400,
            _ => DEFAULT_WIDTH,
        }
    }

    /// Encodes text as WinAnsi bytes; characters outside the code page become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(|ch| winansi_code(ch).unwrap_or(b'?')).collect()
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = self
            .encode(text)
            .into_iter()
            .map(|code| self.code_width(code) as u32)
            .sum();
        units as f32 * size / 1000.0
    }
}

/// Maps a character to its WinAnsiEncoding (cp1252) code.
pub fn winansi_code(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => Some(cp as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_follow_afm() {
        assert_eq!(StandardFont::Helvetica.code_width(b' '), 278);
        assert_eq!(StandardFont::Helvetica.code_width(b'W'), 944);
        assert_eq!(StandardFont::HelveticaBold.code_width(b'b'), 611);
        assert_eq!(StandardFont::Helvetica.code_width(b'~'), 584);
    }

    #[test]
    fn typographic_punctuation_is_encoded() {
        let bytes = StandardFont::Helvetica.encode("“Radist” – ok • fine");
        assert_eq!(bytes[0], 0x93);
        assert!(bytes.contains(&0x96));
        assert!(bytes.contains(&0x95));
        assert!(!bytes.contains(&b'?'));
    }

    #[test]
    fn cyrillic_falls_back_to_question_marks() {
        let bytes = StandardFont::Helvetica.encode("громада");
        assert_eq!(bytes, vec![b'?'; 7]);
    }

    #[test]
    fn width_scales_with_size() {
        let w10 = StandardFont::HelveticaBold.text_width("hromada", 10.0);
        let w20 = StandardFont::HelveticaBold.text_width("hromada", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
        // h r o m a d a
        let units = 611 + 389 + 611 + 889 + 556 + 611 + 556;
        assert!((w10 - units as f32 / 100.0).abs() < 1e-4);
    }
}
