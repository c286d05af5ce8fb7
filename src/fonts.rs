//! Helvetica font variants and the width metrics the layout engine measures
//! text with. The generator uses the base-14 Type1 fonts only, so no font
//! files are read or embedded; widths come from an approximate Helvetica
//! table at 1000 units/em.

use pdf_writer::{Name, Pdf, Ref};

/// Points per document millimetre.
pub(crate) const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    pub(crate) const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    pub(crate) fn base_font(self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
            FontStyle::Italic => b"Helvetica-Oblique",
        }
    }

    /// Resource name inside page dictionaries and content streams.
    pub(crate) fn pdf_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }
}

/// Register the three Helvetica variants as Type1 fonts with WinAnsi
/// encoding. Returns `(pdf_name, ref)` pairs for the page resource dicts.
pub(crate) fn register_fonts(
    pdf: &mut Pdf,
    alloc: &mut impl FnMut() -> Ref,
) -> Vec<(&'static str, Ref)> {
    FontStyle::ALL
        .iter()
        .map(|&style| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(style.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (style.pdf_name(), font_ref)
        })
        .collect()
}

/// Approximate Helvetica advance width for a WinAnsi byte, in 1000 units/em.
fn char_width_1000(b: u8) -> f32 {
    match b {
        32 => 278.0,                          // space
        33..=47 => 333.0,                     // punctuation
        48..=57 => 556.0,                     // digits
        58..=64 => 333.0,                     // more punctuation
        73 | 74 => 278.0,                     // I J (narrow uppercase)
        77 => 833.0,                          // M (wide)
        65..=90 => 667.0,                     // uppercase A-Z (average)
        91..=96 => 333.0,                     // brackets etc.
        102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
        109 | 119 => 833.0,                   // m w (wide)
        97..=122 => 556.0,                    // lowercase a-z (average)
        _ => 556.0,
    }
}

/// Measured width of `text` at `font_size` points, in document millimetres.
/// Monotonic in the text: appending characters never shrinks the width.
pub(crate) fn text_width_mm(text: &str, font_size: f32) -> f32 {
    let pt: f32 = to_winansi_bytes(text)
        .iter()
        .filter(|&&b| b >= 32)
        .map(|&b| char_width_1000(b) * font_size / 1000.0)
        .sum();
    pt / PT_PER_MM
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str
/// encoding. Unmappable chars are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0000..=0x007F => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2020 => Some(0x86),
            0x2021 => Some(0x87),
            0x02C6 => Some(0x88),
            0x2030 => Some(0x89),
            0x0160 => Some(0x8A),
            0x2039 => Some(0x8B),
            0x0152 => Some(0x8C),
            0x017D => Some(0x8E),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95), // bullet
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x02DC => Some(0x98),
            0x2122 => Some(0x99),
            0x0161 => Some(0x9A),
            0x203A => Some(0x9B),
            0x0153 => Some(0x9C),
            0x017E => Some(0x9E),
            0x0178 => Some(0x9F),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_maps_to_winansi() {
        assert_eq!(to_winansi_bytes("•"), vec![0x95]);
    }

    #[test]
    fn width_is_monotonic() {
        let mut prev = 0.0;
        let text = "Full-stack developer with 5 years of experience";
        for end in 1..=text.len() {
            let w = text_width_mm(&text[..end], 9.0);
            assert!(w >= prev, "width shrank at {end}");
            prev = w;
        }
    }

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(text_width_mm("", 10.0), 0.0);
    }
}
