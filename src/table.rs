//! Table row and cell formatting.
//!
//! RTF tables are row based: a row header (`\trowd ...`) is followed by one
//! cell definition per cell, each ending in `\cellx<right boundary>`, then
//! the cell contents closed by `\cell`, and finally `\row`. Borders live on
//! cells only; a row has no border record of its own.

use crate::border::{ShadingFormat, TableBorder};
use crate::control::{push_int, push_word, push_word_param, word_for_code};
use serde::{Deserialize, Serialize};

static ROW_ALIGNMENT_WORDS: [&str; 3] = ["trql", "trqc", "trqr"];

static CELL_VERTICAL_ALIGNMENT_WORDS: [&str; 3] = ["clvertalt", "clvertalc", "clvertalb"];

static CELL_TEXT_DIRECTION_WORDS: [&str; 5] =
    ["cltxlrtb", "cltxtbrl", "cltxbtlr", "cltxlrtbv", "cltxtbrlv"];

/// Gap between cells written with every row.
const ROW_GAP: i32 = 115;

/// Unit for `\trpaddf*`/`\clpadf*`: twips.
const PADDING_UNIT_TWIPS: i32 = 3;

/// Horizontal alignment of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum RowAlignment {
    /// Left aligned
    #[default]
    Left = 0,
    /// Centered
    Center = 1,
    /// Right aligned
    Right = 2,
}

impl RowAlignment {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            _ => return None,
        })
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&ROW_ALIGNMENT_WORDS, self as i32)
    }
}

/// Vertical alignment of text in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum CellVerticalAlignment {
    /// Top aligned
    Top = 0,
    /// Centered
    #[default]
    Center = 1,
    /// Bottom aligned
    Bottom = 2,
}

impl CellVerticalAlignment {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Top,
            1 => Self::Center,
            2 => Self::Bottom,
            _ => return None,
        })
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&CELL_VERTICAL_ALIGNMENT_WORDS, self as i32)
    }
}

/// Text flow direction in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum CellTextDirection {
    /// Left to right, top to bottom
    #[default]
    LeftRightTopBottom = 0,
    /// Right to left, top to bottom
    RightLeftTopBottom = 1,
    /// Left to right, bottom to top
    LeftRightBottomTop = 2,
    /// Left to right, top to bottom, vertical
    LeftRightTopBottomVertical = 3,
    /// Right to left, top to bottom, vertical
    RightLeftTopBottomVertical = 4,
}

impl CellTextDirection {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::LeftRightTopBottom,
            1 => Self::RightLeftTopBottom,
            2 => Self::LeftRightBottomTop,
            3 => Self::LeftRightTopBottomVertical,
            4 => Self::RightLeftTopBottomVertical,
            _ => return None,
        })
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&CELL_TEXT_DIRECTION_WORDS, self as i32)
    }
}

/// Table row geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRowFormat {
    /// Row alignment
    pub alignment: RowAlignment,
    /// Row height (in twips, 0 is automatic)
    pub height: i32,
    /// Default left cell padding (in twips)
    pub margin_left: i32,
    /// Default right cell padding (in twips)
    pub margin_right: i32,
    /// Default top cell padding (in twips)
    pub margin_top: i32,
    /// Default bottom cell padding (in twips)
    pub margin_bottom: i32,
    /// Position of the row's left edge (in twips)
    pub left_offset: i32,
}

impl TableRowFormat {
    /// Write the row header, starting on a new line.
    pub fn write_row_start(&self, buf: &mut String) {
        buf.push('\n');
        push_word(buf, "trowd");
        push_word_param(buf, "trgaph", ROW_GAP);
        push_word(buf, self.alignment.control_word());
        push_word_param(buf, "trleft", self.left_offset);
        push_word_param(buf, "trrh", self.height);

        for (side, value) in [
            ('b', self.margin_bottom),
            ('l', self.margin_left),
            ('r', self.margin_right),
            ('t', self.margin_top),
        ] {
            push_padding(buf, "trpadd", "trpaddf", side, value);
        }
    }

    /// Write the row terminator.
    pub fn write_row_end(buf: &mut String) {
        buf.push('\n');
        push_word_param(buf, "trgaph", ROW_GAP);
        push_word(buf, "row");
        push_word(buf, "pard");
    }
}

/// Write `\<word><side><value>\<unit_word><side>3`.
fn push_padding(buf: &mut String, word: &str, unit_word: &str, side: char, value: i32) {
    buf.push('\\');
    buf.push_str(word);
    buf.push(side);
    push_int(buf, value);
    buf.push('\\');
    buf.push_str(unit_word);
    buf.push(side);
    push_int(buf, PADDING_UNIT_TWIPS);
}

/// Table cell geometry, borders and shading.
///
/// Cell records are independent: nothing is inherited from the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCellFormat {
    /// Vertical text alignment
    pub vertical_alignment: CellVerticalAlignment,
    /// Left padding (in twips, 0 uses the row default). Written as
    /// `\clpadt`, which Word reads as the left padding.
    pub margin_left: i32,
    /// Right padding (in twips, 0 uses the row default)
    pub margin_right: i32,
    /// Top padding (in twips, 0 uses the row default). Written as `\clpadl`,
    /// which Word reads as the top padding.
    pub margin_top: i32,
    /// Bottom padding (in twips, 0 uses the row default)
    pub margin_bottom: i32,
    /// Text direction
    pub text_direction: CellTextDirection,
    /// Render [`TableCellFormat::shading`]
    pub has_shading: bool,
    /// Cell shading
    pub shading: ShadingFormat,
    /// Left border
    pub border_left: TableBorder,
    /// Right border
    pub border_right: TableBorder,
    /// Top border
    pub border_top: TableBorder,
    /// Bottom border
    pub border_bottom: TableBorder,
}

impl TableCellFormat {
    /// Enable the same border on all four sides.
    pub fn set_all_borders(&mut self, border: TableBorder) {
        self.border_left = border;
        self.border_right = border;
        self.border_top = border;
        self.border_bottom = border;
    }

    /// Write the cell definition ending in `\cellx<right_boundary>`.
    ///
    /// `right_boundary` is the absolute position of the cell's right edge in
    /// twips; boundaries within a row are expected to increase.
    pub fn write_cell_start(&self, buf: &mut String, right_boundary: i32) {
        buf.push('\n');
        push_word(buf, "tcelld");
        push_word(buf, self.vertical_alignment.control_word());
        push_word(buf, self.text_direction.control_word());

        self.border_bottom.write_cell_border(buf, "clbrdrb");
        self.border_left.write_cell_border(buf, "clbrdrl");
        self.border_right.write_cell_border(buf, "clbrdrr");
        self.border_top.write_cell_border(buf, "clbrdrt");

        if self.has_shading {
            self.shading.write_cell_shading(buf);
        }

        // Word swaps \clpadl and \clpadt: \clpadl is the top padding.
        for (side, value) in [
            ('l', self.margin_top),
            ('t', self.margin_left),
            ('b', self.margin_bottom),
            ('r', self.margin_right),
        ] {
            if value != 0 {
                push_padding(buf, "clpad", "clpadf", side, value);
            }
        }

        push_word_param(buf, "cellx", right_boundary);
    }

    /// Write the cell terminator.
    pub fn write_cell_end(buf: &mut String) {
        buf.push('\n');
        push_word(buf, "cell");
        buf.push(' ');
    }
}
