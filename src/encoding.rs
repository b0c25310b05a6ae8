//! ANSI code page handling.
//!
//! The header declares one ANSI code page (`\ansicpg`). Every `\'hh`
//! fallback byte and every font's `\cpg` must agree with it, so the writer
//! resolves the code page once and hands the same [`CodePage`] to each
//! renderer that writes text.

use encoding_rs::Encoding;

/// Map a Windows code page identifier to an `encoding_rs` encoding.
///
/// Only ANSI code pages are listed. Unicode "code pages" (1200, 1201, 65001)
/// have no single-byte fallback and map to `None`.
#[inline]
pub fn codepage_to_encoding(codepage: u16) -> Option<&'static Encoding> {
    match codepage {
        // DOS codepages
        437 | 850 => Some(encoding_rs::IBM866), // Approximation

        // Windows codepages
        874 => Some(encoding_rs::WINDOWS_874),   // Thai
        1250 => Some(encoding_rs::WINDOWS_1250), // Central European
        1251 => Some(encoding_rs::WINDOWS_1251), // Cyrillic
        1252 => Some(encoding_rs::WINDOWS_1252), // Western European
        1253 => Some(encoding_rs::WINDOWS_1253), // Greek
        1254 => Some(encoding_rs::WINDOWS_1254), // Turkish
        1255 => Some(encoding_rs::WINDOWS_1255), // Hebrew
        1256 => Some(encoding_rs::WINDOWS_1256), // Arabic
        1257 => Some(encoding_rs::WINDOWS_1257), // Baltic
        1258 => Some(encoding_rs::WINDOWS_1258), // Vietnamese

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),

        // ISO 8859 series
        28591 => Some(encoding_rs::WINDOWS_1252), // ISO-8859-1 approximation
        28592 => Some(encoding_rs::ISO_8859_2),
        28593 => Some(encoding_rs::ISO_8859_3),
        28594 => Some(encoding_rs::ISO_8859_4),
        28595 => Some(encoding_rs::ISO_8859_5),
        28596 => Some(encoding_rs::ISO_8859_6),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28603 => Some(encoding_rs::ISO_8859_13),
        28605 => Some(encoding_rs::ISO_8859_15),

        // KOI8 series
        20866 => Some(encoding_rs::KOI8_R),
        21866 => Some(encoding_rs::KOI8_U),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),

        _ => None,
    }
}

/// An ANSI code page and its encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePage {
    number: u16,
    encoding: Option<&'static Encoding>,
}

impl CodePage {
    /// Resolve a Windows code page number.
    ///
    /// Unknown numbers are kept, so they can still be declared in the
    /// header, but produce `?` for every non-ASCII fallback.
    pub fn new(number: u16) -> Self {
        Self {
            number,
            encoding: codepage_to_encoding(number),
        }
    }

    /// Code page number, as written by `\ansicpg` and `\cpg`.
    #[inline]
    pub fn number(self) -> u16 {
        self.number
    }

    /// Whether fallback bytes can be produced for this code page.
    #[inline]
    pub fn is_supported(self) -> bool {
        self.encoding.is_some()
    }

    /// The single byte `ch` encodes to, if there is exactly one.
    ///
    /// Characters that need a double-byte sequence in an East Asian code
    /// page have no single-byte fallback.
    pub(crate) fn ansi_byte(self, ch: char) -> Option<u8> {
        let encoding = self.encoding?;
        let mut utf8 = [0u8; 4];
        let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut utf8));
        match bytes.as_ref() {
            [byte] if !had_errors => Some(*byte),
            _ => None,
        }
    }
}

impl Default for CodePage {
    fn default() -> Self {
        Self::new(1252)
    }
}
