//! Low-level RTF control-word emission.
//!
//! Every renderer in this crate writes into a caller-supplied `String`
//! through the helpers in this module, so a whole block (a paragraph, a row
//! header, a cell definition) is assembled in one growable buffer and handed
//! to the sink with a single write.
//!
//! Numbers go through `itoa` instead of `format!` to avoid a temporary
//! allocation per control word.

use crate::encoding::CodePage;

/// Lowercase hex digits used by [`bin_hex_convert`] and `\'hh` escapes.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Append a parameterless control word (`\word`).
#[inline]
pub fn push_word(buf: &mut String, word: &str) {
    buf.push('\\');
    buf.push_str(word);
}

/// Append a control word with an integer parameter (`\word123`).
///
/// Values are written as-is: negative and oversized values are not clamped.
#[inline]
pub fn push_word_param(buf: &mut String, word: &str, value: i32) {
    push_word(buf, word);
    push_int(buf, value);
}

/// Append a decimal integer.
#[inline]
pub fn push_int(buf: &mut String, value: i32) {
    let mut digits = itoa::Buffer::new();
    buf.push_str(digits.format(value));
}

/// Append `on` or `off` depending on `flag`.
///
/// Used for character toggles so that the off state is always written
/// explicitly and never inherited from a previous block.
#[inline]
pub fn push_toggle(buf: &mut String, flag: bool, on: &str, off: &str) {
    push_word(buf, if flag { on } else { off });
}

/// Look up a control word by enumeration code.
///
/// Codes outside the table map to the empty string.
#[inline]
pub fn word_for_code(table: &[&'static str], code: i32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|index| table.get(index).copied())
        .unwrap_or("")
}

/// Append a looked-up control word, or nothing for an empty one.
#[inline]
pub fn push_optional_word(buf: &mut String, word: &str) {
    if !word.is_empty() {
        push_word(buf, word);
    }
}

/// Convert Unicode text into ASCII-only RTF text for Windows-1252.
///
/// ASCII characters are copied verbatim, so callers may embed their own
/// control words. Every other character becomes one `\uN` per UTF-16 code
/// unit (`N` is the signed 16-bit value RTF readers expect) followed by a
/// single fallback character for readers that ignore `\u`: the
/// Windows-1252 byte as `\'hh` when one exists, `?` otherwise.
///
/// The conversion is lossy for readers that only understand the fallback.
/// Use [`encode_text_with`] for documents declaring another code page.
///
/// # Examples
///
/// ```
/// use rtf_writer::encode_text;
///
/// assert_eq!(encode_text("abc"), "abc");
/// assert_eq!(encode_text("é"), "\\u233\\'e9");
/// assert_eq!(encode_text("Ж"), "\\u1046?");
/// ```
pub fn encode_text(text: &str) -> String {
    encode_text_with(text, CodePage::default())
}

/// Convert Unicode text into ASCII-only RTF text, taking fallback bytes
/// from `code_page`.
///
/// # Examples
///
/// ```
/// use rtf_writer::{CodePage, encode_text_with};
///
/// assert_eq!(encode_text_with("Ж", CodePage::new(1251)), "\\u1046\\'c6");
/// ```
pub fn encode_text_with(text: &str, code_page: CodePage) -> String {
    let mut out = String::with_capacity(text.len());
    push_encoded_text(&mut out, text, code_page);
    out
}

/// Buffer-writing variant of [`encode_text_with`].
pub fn push_encoded_text(buf: &mut String, text: &str, code_page: CodePage) {
    for ch in text.chars() {
        if ch.is_ascii() {
            buf.push(ch);
            continue;
        }

        let mut units = [0u16; 2];
        let units = ch.encode_utf16(&mut units);
        let fallback = code_page.ansi_byte(ch);
        for unit in units.iter() {
            // RTF takes the code unit as a signed 16-bit value.
            push_word_param(buf, "u", i32::from(*unit as i16));
            match fallback {
                Some(byte) if units.len() == 1 => push_hex_escape(buf, byte),
                _ => buf.push('?'),
            }
        }
    }
}

/// Append an RTF hex escape (`\'hh`).
#[inline]
fn push_hex_escape(buf: &mut String, byte: u8) {
    buf.push_str("\\'");
    buf.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    buf.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
}

/// Convert binary data to a lowercase hex string, two digits per byte.
///
/// This is the encoding RTF uses for embedded picture data.
///
/// # Examples
///
/// ```
/// use rtf_writer::bin_hex_convert;
///
/// assert_eq!(bin_hex_convert(&[0x00, 0x7f, 0xab]), "007fab");
/// ```
pub fn bin_hex_convert(binary: &[u8]) -> String {
    let mut out = String::with_capacity(binary.len() * 2);
    for byte in binary {
        out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_control_words() {
        let mut buf = String::new();
        push_word_param(&mut buf, "test", 42);
        push_word(&mut buf, "flag");
        push_word_param(&mut buf, "neg", -15);
        assert_eq!(buf, "\\test42\\flag\\neg-15");
    }

    #[test]
    fn test_toggle_writes_off_state() {
        let mut buf = String::new();
        push_toggle(&mut buf, false, "b", "b0");
        push_toggle(&mut buf, true, "i", "i0");
        assert_eq!(buf, "\\b0\\i");
    }

    #[test]
    fn test_word_for_code_out_of_range() {
        let table = ["a", "b"];
        assert_eq!(word_for_code(&table, 1), "b");
        assert_eq!(word_for_code(&table, 2), "");
        assert_eq!(word_for_code(&table, -1), "");
    }

    #[test]
    fn test_optional_word() {
        let mut buf = String::new();
        push_optional_word(&mut buf, "");
        push_optional_word(&mut buf, "qc");
        assert_eq!(buf, "\\qc");
    }

    #[test]
    fn test_encode_ascii_verbatim() {
        assert_eq!(encode_text("Hello {\\b world}"), "Hello {\\b world}");
    }

    #[test]
    fn test_encode_latin1_uses_ansi_fallback() {
        assert_eq!(encode_text("café"), "caf\\u233\\'e9");
        // Euro sign lives at 0x80 in Windows-1252
        assert_eq!(encode_text("€"), "\\u8364\\'80");
    }

    #[test]
    fn test_encode_with_other_code_page() {
        let cyrillic = CodePage::new(1251);
        assert_eq!(encode_text_with("é Ж", cyrillic), "\\u233? \\u1046\\'c6");
        let unknown = CodePage::new(9999);
        assert_eq!(encode_text_with("é", unknown), "\\u233?");
    }

    #[test]
    fn test_encode_without_ansi_byte() {
        assert_eq!(encode_text("日"), "\\u26085?");
    }

    #[test]
    fn test_encode_negative_code_unit() {
        // U+FF01 is above 32767 and wraps to a negative parameter
        assert_eq!(encode_text("\u{ff01}"), "\\u-255?");
    }

    #[test]
    fn test_encode_surrogate_pair() {
        // U+1F600 becomes D83D DE00
        assert_eq!(encode_text("\u{1f600}"), "\\u-10179?\\u-8704?");
    }

    #[test]
    fn test_bin_hex_convert() {
        assert_eq!(bin_hex_convert(&[]), "");
        assert_eq!(bin_hex_convert(&[0x0f, 0xf0, 0xff, 0x10]), "0ff0ff10");
    }

    proptest! {
        #[test]
        fn prop_encoded_text_is_ascii(text in "\\PC*") {
            let encoded = encode_text(&text);
            prop_assert!(encoded.is_ascii());
        }

        #[test]
        fn prop_ascii_text_is_unchanged(text in "[ -~]*") {
            prop_assert_eq!(encode_text(&text), text);
        }
    }
}
