//! RTF border and shading support.
//!
//! Borders and shading are shared by paragraphs and table cells. The control
//! words for border types and shading patterns live in static tables indexed
//! by enumeration code; [`border_name`] and [`shading_name`] look codes up
//! and return an empty string for anything outside the table.

use crate::control::{push_optional_word, push_word, push_word_param, word_for_code};
use crate::types::ColorRef;
use serde::{Deserialize, Serialize};

/// Border type control words, indexed by [`BorderType`] code.
static BORDER_TYPE_WORDS: [&str; 18] = [
    "brdrs",
    "brdrth",
    "brdrsh",
    "brdrdb",
    "brdrdot",
    "brdrdash",
    "brdrhair",
    "brdrinset",
    "brdrdashsm",
    "brdrdashd",
    "brdrdashdd",
    "brdroutset",
    "brdrtriple",
    "brdrwavy",
    "brdrwavydb",
    "brdrdashdotstr",
    "brdremboss",
    "brdrengrave",
];

/// Paragraph shading pattern words, indexed by [`ShadingPattern`] code.
static PARAGRAPH_SHADING_WORDS: [&str; 13] = [
    "",
    "bghoriz",
    "bgvert",
    "bgfdiag",
    "bgbdiag",
    "bgcross",
    "bgdcross",
    "bgdkhoriz",
    "bgdkvert",
    "bgdkfdiag",
    "bgdkbdiag",
    "bgdkcross",
    "bgdkdcross",
];

/// Cell shading pattern words, indexed by [`ShadingPattern`] code.
static CELL_SHADING_WORDS: [&str; 13] = [
    "",
    "clbghoriz",
    "clbgvert",
    "clbgfdiag",
    "clbgbdiag",
    "clbgcross",
    "clbgdcross",
    "clbgdkhoriz",
    "clbgdkvert",
    "clbgdkfdiag",
    "clbgdkbdiag",
    "clbgdkcross",
    "clbgdkdcross",
];

/// Paragraph border kind words, indexed by [`BorderKind`] code.
static BORDER_KIND_WORDS: [&str; 6] = ["", "brdrt", "brdrb", "brdrl", "brdrr", "box"];

/// Border type control word (including the leading backslash) for a raw
/// border type code.
///
/// Unmapped codes yield an empty string.
///
/// # Examples
///
/// ```
/// use rtf_writer::border_name;
///
/// assert_eq!(border_name(0), "\\brdrs");
/// assert_eq!(border_name(99), "");
/// ```
pub fn border_name(border_type: i32) -> String {
    prefixed(word_for_code(&BORDER_TYPE_WORDS, border_type))
}

/// Shading pattern control word for a raw shading code.
///
/// `cell` selects the table-cell variants (`\clbg...`). The fill pattern
/// and unmapped codes yield an empty string.
pub fn shading_name(shading_type: i32, cell: bool) -> String {
    let table = if cell {
        &CELL_SHADING_WORDS
    } else {
        &PARAGRAPH_SHADING_WORDS
    };
    prefixed(word_for_code(table, shading_type))
}

fn prefixed(word: &str) -> String {
    if word.is_empty() {
        String::new()
    } else {
        let mut out = String::with_capacity(word.len() + 1);
        push_word(&mut out, word);
        out
    }
}

/// Which side(s) of a paragraph a border applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum BorderKind {
    /// No border
    #[default]
    None = 0,
    /// Top border
    Top = 1,
    /// Bottom border
    Bottom = 2,
    /// Left border
    Left = 3,
    /// Right border
    Right = 4,
    /// Box around the paragraph
    Box = 5,
}

impl BorderKind {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Top,
            2 => Self::Bottom,
            3 => Self::Left,
            4 => Self::Right,
            5 => Self::Box,
            _ => return None,
        })
    }

    /// Numeric code of this kind.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Control word without backslash; empty for [`BorderKind::None`].
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&BORDER_KIND_WORDS, self.code())
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum BorderType {
    /// Single-thickness border
    #[default]
    Single = 0,
    /// Double-thickness border
    Thick = 1,
    /// Shadowed border
    Shadow = 2,
    /// Double border
    Double = 3,
    /// Dotted border
    Dotted = 4,
    /// Dashed border
    Dashed = 5,
    /// Hairline border
    Hairline = 6,
    /// Inset border
    Inset = 7,
    /// Small dashed border
    DashedSmall = 8,
    /// Dot-dashed border
    DotDash = 9,
    /// Dot-dot-dashed border
    DotDotDash = 10,
    /// Outset border
    Outset = 11,
    /// Triple border
    Triple = 12,
    /// Wavy border
    Wavy = 13,
    /// Double wavy border
    WavyDouble = 14,
    /// Striped border
    Striped = 15,
    /// Embossed border
    Embossed = 16,
    /// Engraved border
    Engraved = 17,
}

impl BorderType {
    /// All border types in code order.
    pub const ALL: [BorderType; 18] = [
        Self::Single,
        Self::Thick,
        Self::Shadow,
        Self::Double,
        Self::Dotted,
        Self::Dashed,
        Self::Hairline,
        Self::Inset,
        Self::DashedSmall,
        Self::DotDash,
        Self::DotDotDash,
        Self::Outset,
        Self::Triple,
        Self::Wavy,
        Self::WavyDouble,
        Self::Striped,
        Self::Embossed,
        Self::Engraved,
    ];

    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Numeric code of this type.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&BORDER_TYPE_WORDS, self.code())
    }
}

/// Shading pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum ShadingPattern {
    /// Plain fill (no pattern word)
    #[default]
    Fill = 0,
    /// Horizontal stripes
    Horizontal = 1,
    /// Vertical stripes
    Vertical = 2,
    /// Forward diagonal stripes
    ForwardDiagonal = 3,
    /// Backward diagonal stripes
    BackwardDiagonal = 4,
    /// Crosshatch
    Cross = 5,
    /// Diagonal crosshatch
    DiagonalCross = 6,
    /// Dark horizontal
    DarkHorizontal = 7,
    /// Dark vertical
    DarkVertical = 8,
    /// Dark forward diagonal
    DarkForwardDiagonal = 9,
    /// Dark backward diagonal
    DarkBackwardDiagonal = 10,
    /// Dark crosshatch
    DarkCross = 11,
    /// Dark diagonal crosshatch
    DarkDiagonalCross = 12,
}

impl ShadingPattern {
    /// All patterns in code order.
    pub const ALL: [ShadingPattern; 13] = [
        Self::Fill,
        Self::Horizontal,
        Self::Vertical,
        Self::ForwardDiagonal,
        Self::BackwardDiagonal,
        Self::Cross,
        Self::DiagonalCross,
        Self::DarkHorizontal,
        Self::DarkVertical,
        Self::DarkForwardDiagonal,
        Self::DarkBackwardDiagonal,
        Self::DarkCross,
        Self::DarkDiagonalCross,
    ];

    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Numeric code of this pattern.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Control word without backslash; empty for [`ShadingPattern::Fill`].
    #[inline]
    pub fn control_word(self, cell: bool) -> &'static str {
        let table = if cell {
            &CELL_SHADING_WORDS
        } else {
            &PARAGRAPH_SHADING_WORDS
        };
        word_for_code(table, self.code())
    }
}

/// Border definition shared by paragraphs and table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderFormat {
    /// Border side(s); only used by paragraph borders
    pub kind: BorderKind,
    /// Line style
    pub border_type: BorderType,
    /// Width in twips
    pub width: i32,
    /// Color table index
    pub color: ColorRef,
    /// Distance from the text in twips
    pub space: i32,
}

impl Default for BorderFormat {
    fn default() -> Self {
        Self {
            kind: BorderKind::None,
            border_type: BorderType::Single,
            width: 0,
            color: 0,
            space: 0,
        }
    }
}

impl BorderFormat {
    /// Write `<type>\brdrw<w>\brsp<s>\brdrcf<c>`.
    pub(crate) fn write_line(&self, buf: &mut String) {
        push_optional_word(buf, self.border_type.control_word());
        push_word_param(buf, "brdrw", self.width);
        push_word_param(buf, "brsp", self.space);
        push_word_param(buf, "brdrcf", self.color);
    }

    /// Write the paragraph border: kind word followed by the line.
    pub fn write_paragraph_border(&self, buf: &mut String) {
        push_optional_word(buf, self.kind.control_word());
        self.write_line(buf);
    }
}

/// Shading definition shared by paragraphs and table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingFormat {
    /// Shading intensity in hundredths of a percent
    pub intensity: i32,
    /// Pattern
    pub pattern: ShadingPattern,
    /// Pattern (foreground) color table index
    pub fill_color: ColorRef,
    /// Background color table index
    pub background_color: ColorRef,
}

impl ShadingFormat {
    /// Write paragraph shading: `\shading<i><pattern>\cfpat<f>\cbpat<b>`.
    pub fn write_paragraph_shading(&self, buf: &mut String) {
        push_word_param(buf, "shading", self.intensity);
        push_optional_word(buf, self.pattern.control_word(false));
        push_word_param(buf, "cfpat", self.fill_color);
        push_word_param(buf, "cbpat", self.background_color);
    }

    /// Write cell shading: `<pattern>\clshdng<i>\clcfpat<f>\clcbpat<b>`.
    pub fn write_cell_shading(&self, buf: &mut String) {
        push_optional_word(buf, self.pattern.control_word(true));
        push_word_param(buf, "clshdng", self.intensity);
        push_word_param(buf, "clcfpat", self.fill_color);
        push_word_param(buf, "clcbpat", self.background_color);
    }
}

/// One side of a table cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableBorder {
    /// Whether this side is drawn
    pub enabled: bool,
    /// Border definition
    pub border: BorderFormat,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            enabled: false,
            border: BorderFormat {
                width: 5,
                ..BorderFormat::default()
            },
        }
    }
}

impl TableBorder {
    /// Create an enabled border.
    #[inline]
    pub fn new(border_type: BorderType, width: i32) -> Self {
        Self {
            enabled: true,
            border: BorderFormat {
                border_type,
                width,
                ..BorderFormat::default()
            },
        }
    }

    /// Write `\clbrdr<side><line>` when enabled.
    pub(crate) fn write_cell_border(&self, buf: &mut String, side: &str) {
        if !self.enabled {
            return;
        }
        push_word(buf, side);
        self.border.write_line(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_border_names_are_distinct() {
        let names: HashSet<String> = (0..18).map(border_name).collect();
        assert_eq!(names.len(), 18);
        assert!(names.iter().all(|name| name.starts_with("\\brdr")));
    }

    #[test]
    fn test_border_name_out_of_table() {
        assert_eq!(border_name(18), "");
        assert_eq!(border_name(-1), "");
        assert_eq!(border_name(i32::MAX), "");
    }

    #[test]
    fn test_border_type_codes_match_table() {
        for (code, ty) in BorderType::ALL.iter().enumerate() {
            assert_eq!(ty.code(), code as i32);
            assert_eq!(BorderType::from_code(code as i32), Some(*ty));
        }
        assert_eq!(BorderType::from_code(18), None);
        assert_eq!(border_name(BorderType::Striped.code()), "\\brdrdashdotstr");
    }

    #[test]
    fn test_shading_names() {
        assert_eq!(shading_name(0, false), "");
        assert_eq!(shading_name(0, true), "");
        assert_eq!(shading_name(1, false), "\\bghoriz");
        assert_eq!(shading_name(12, true), "\\clbgdkdcross");
        assert_eq!(shading_name(13, false), "");
        assert_eq!(ShadingPattern::from_code(6), Some(ShadingPattern::DiagonalCross));
    }

    #[test]
    fn test_paragraph_border() {
        let border = BorderFormat {
            kind: BorderKind::Box,
            border_type: BorderType::Double,
            width: 20,
            color: 3,
            space: 40,
        };
        let mut buf = String::new();
        border.write_paragraph_border(&mut buf);
        assert_eq!(buf, "\\box\\brdrdb\\brdrw20\\brsp40\\brdrcf3");
    }

    #[test]
    fn test_border_kind_none_has_no_word() {
        let mut buf = String::new();
        BorderFormat::default().write_paragraph_border(&mut buf);
        assert_eq!(buf, "\\brdrs\\brdrw0\\brsp0\\brdrcf0");
        assert_eq!(BorderKind::from_code(6), None);
    }

    #[test]
    fn test_shading_output() {
        let shading = ShadingFormat {
            intensity: 2500,
            pattern: ShadingPattern::Cross,
            fill_color: 1,
            background_color: 7,
        };
        let mut para = String::new();
        shading.write_paragraph_shading(&mut para);
        assert_eq!(para, "\\shading2500\\bgcross\\cfpat1\\cbpat7");

        let mut cell = String::new();
        shading.write_cell_shading(&mut cell);
        assert_eq!(cell, "\\clbgcross\\clshdng2500\\clcfpat1\\clcbpat7");
    }

    #[test]
    fn test_disabled_cell_border_writes_nothing() {
        let mut buf = String::new();
        TableBorder::default().write_cell_border(&mut buf, "clbrdrt");
        assert!(buf.is_empty());

        TableBorder::new(BorderType::Dotted, 10).write_cell_border(&mut buf, "clbrdrt");
        assert_eq!(buf, "\\clbrdrt\\brdrdot\\brdrw10\\brsp0\\brdrcf0");
    }
}
