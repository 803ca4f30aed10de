//! # Camera Character Set
//!
//! Strings in the save (owner name, photo comments) use the cartridge's own
//! character codes. Printable codes run from 0x56 to 0xC8; everything else is
//! either padding (0x00) or not a glyph.

pub const CHAR_CODE_START: u8 = 0x56;
pub const CHAR_CODE_END: u8 = 0xC8;
pub const CHAR_TABLE_LEN: usize = (CHAR_CODE_END - CHAR_CODE_START) as usize + 1;

/// Glyphs for codes 0x56..=0xC8, in code order.
pub const CHAR_TABLE: [char; CHAR_TABLE_LEN] = [
    // 0x56..=0x6F
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    // 0x70..=0x89
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    // 0x8A..=0x9F
    'À', 'Á', 'Â', 'Ä', 'Ç', 'È', 'É', 'Ê', 'Ë', 'Ì', 'Í', 'Î', 'Ï', 'Ñ', 'Ò', 'Ó', 'Ô', 'Ö',
    'Ù', 'Ú', 'Û', 'Ü',
    // 0xA0..=0xB5
    'à', 'á', 'â', 'ä', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï', 'ñ', 'ò', 'ó', 'ô', 'ö',
    'ù', 'ú', 'û', 'ü',
    // 0xB6..=0xC8
    'ß', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ' ', '!', '?', '&', '.', ',', '-',
    '@',
];

/// What a byte without a glyph turns into when decoding a string field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharFallback {
    /// Contributes nothing.
    #[default]
    Skip,
    /// Contributes a single space.
    Space,
}

impl CharFallback {
    fn emit(self, out: &mut String) {
        if self == CharFallback::Space {
            out.push(' ');
        }
    }
}

/// Maps one character code to its glyph. `None` outside 0x56..=0xC8.
pub fn to_char(code: u8) -> Option<char> {
    if (CHAR_CODE_START..=CHAR_CODE_END).contains(&code) {
        Some(CHAR_TABLE[(code - CHAR_CODE_START) as usize])
    } else {
        None
    }
}

/// Decodes a run of character codes in address order.
///
/// Zero bytes are padding and follow `zero_byte`; any other code with no glyph
/// follows `invalid_byte`.
pub fn decode_string(bytes: &[u8], zero_byte: CharFallback, invalid_byte: CharFallback) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &code in bytes {
        if code == 0 {
            zero_byte.emit(&mut out);
            continue;
        }
        match to_char(code) {
            Some(c) => out.push(c),
            None => invalid_byte.emit(&mut out),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_full_code_range() {
        assert_eq!(CHAR_TABLE_LEN, 115);
        assert_eq!(to_char(0x56), Some('A'));
        assert_eq!(to_char(0x57), Some('B'));
        assert_eq!(to_char(0x6F), Some('Z'));
        assert_eq!(to_char(0x70), Some('a'));
        assert_eq!(to_char(0xC8), Some('@'));
    }

    #[test]
    fn codes_outside_range_have_no_glyph() {
        assert_eq!(to_char(0x00), None);
        assert_eq!(to_char(0x10), None);
        assert_eq!(to_char(0x55), None);
        assert_eq!(to_char(0xC9), None);
        assert_eq!(to_char(0xFF), None);
    }

    #[test]
    fn skip_policy_drops_padding_and_invalid_codes() {
        let bytes = [0x56, 0x00, 0x57, 0x10, 0x58];
        let s = decode_string(&bytes, CharFallback::Skip, CharFallback::Skip);
        assert_eq!(s, "ABC");
    }

    #[test]
    fn space_policy_is_applied_per_category() {
        let bytes = [0x56, 0x00, 0x57, 0x10, 0x58];
        let s = decode_string(&bytes, CharFallback::Skip, CharFallback::Space);
        assert_eq!(s, "AB C");
        let s = decode_string(&bytes, CharFallback::Space, CharFallback::Skip);
        assert_eq!(s, "A BC");
    }

    #[test]
    fn undefined_code_alone_yields_empty_string() {
        let s = decode_string(&[0x10], CharFallback::Skip, CharFallback::Skip);
        assert_eq!(s, "");
    }
}
