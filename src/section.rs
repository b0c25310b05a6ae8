//! Document and section formatting.
//!
//! The document format is written once, right after the header. A section
//! format block is written when the document is opened and again for every
//! new section; there is no explicit "end of section", the next section block
//! delimits the previous one.

use crate::control::{push_word, push_word_param, word_for_code};
use serde::{Deserialize, Serialize};

/// Section break control words, indexed by [`SectionBreak`] code.
static SECTION_BREAK_WORDS: [&str; 5] = ["sbknone", "sbkcol", "sbkpage", "sbkeven", "sbkodd"];

/// Document view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum ViewKind {
    /// No view mode
    None = 0,
    /// Page layout view
    #[default]
    Page = 1,
    /// Outline view
    Outline = 2,
    /// Master document view
    Master = 3,
    /// Normal view
    Normal = 4,
}

impl ViewKind {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Page,
            2 => Self::Outline,
            3 => Self::Master,
            4 => Self::Normal,
            _ => return None,
        })
    }

    /// Numeric code, as written by `\viewkind`.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Section break type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum SectionBreak {
    /// Continuous section (no page break)
    #[default]
    Continuous = 0,
    /// New column
    Column = 1,
    /// New page
    Page = 2,
    /// New even page
    EvenPage = 3,
    /// New odd page
    OddPage = 4,
}

impl SectionBreak {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Continuous,
            1 => Self::Column,
            2 => Self::Page,
            3 => Self::EvenPage,
            4 => Self::OddPage,
            _ => return None,
        })
    }

    /// Numeric code of this break.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&SECTION_BREAK_WORDS, self.code())
    }
}

/// Page-level document properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFormat {
    /// View mode
    pub view_kind: ViewKind,
    /// Zoom level in percent
    pub view_scale: i32,
    /// Paper width (in twips)
    pub paper_width: i32,
    /// Paper height (in twips)
    pub paper_height: i32,
    /// Left margin (in twips)
    pub margin_left: i32,
    /// Right margin (in twips)
    pub margin_right: i32,
    /// Top margin (in twips)
    pub margin_top: i32,
    /// Bottom margin (in twips)
    pub margin_bottom: i32,
    /// Facing pages (activates odd/even headers and gutters)
    pub facing_pages: bool,
    /// Gutter width (in twips)
    pub gutter_width: i32,
    /// Protect the document against editing
    pub read_only: bool,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self {
            view_kind: ViewKind::Page,
            view_scale: 100,
            paper_width: 12240,  // 8.5 inches at 1440 twips/inch
            paper_height: 15840, // 11 inches
            margin_left: 1800,   // 1.25 inches
            margin_right: 1800,
            margin_top: 1440, // 1 inch
            margin_bottom: 1440,
            facing_pages: false,
            gutter_width: 0,
            read_only: false,
        }
    }
}

impl DocumentFormat {
    /// Write the document formatting block.
    pub fn write_rtf(&self, buf: &mut String) {
        push_word_param(buf, "viewkind", self.view_kind.code());
        push_word_param(buf, "viewscale", self.view_scale);
        push_word_param(buf, "paperw", self.paper_width);
        push_word_param(buf, "paperh", self.paper_height);
        push_word_param(buf, "margl", self.margin_left);
        push_word_param(buf, "margr", self.margin_right);
        push_word_param(buf, "margt", self.margin_top);
        push_word_param(buf, "margb", self.margin_bottom);
        push_word_param(buf, "gutter", self.gutter_width);

        if self.facing_pages {
            push_word(buf, "facingp");
        }
        if self.read_only {
            push_word(buf, "annotprot");
        }
    }

    /// Render the document formatting block to a new string.
    pub fn to_rtf(&self) -> String {
        let mut buf = String::with_capacity(128);
        self.write_rtf(&mut buf);
        buf
    }
}

/// Section properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionFormat {
    /// Section break type
    pub section_break: SectionBreak,
    /// Start a new section (`\sect`)
    pub new_section: bool,
    /// Reset to default section properties (`\sectd`)
    pub default_section: bool,
    /// Page width (in twips)
    pub page_width: i32,
    /// Page height (in twips)
    pub page_height: i32,
    /// Left margin (in twips)
    pub page_margin_left: i32,
    /// Right margin (in twips)
    pub page_margin_right: i32,
    /// Top margin (in twips)
    pub page_margin_top: i32,
    /// Bottom margin (in twips)
    pub page_margin_bottom: i32,
    /// Gutter width (in twips)
    pub page_gutter_width: i32,
    /// Header distance from the top edge (in twips)
    pub header_offset: i32,
    /// Footer distance from the bottom edge (in twips)
    pub footer_offset: i32,
    /// Show page numbers
    pub show_page_number: bool,
    /// Page number distance from the right edge (in twips)
    pub page_number_offset_x: i32,
    /// Page number distance from the top edge (in twips)
    pub page_number_offset_y: i32,
    /// Multi-column layout
    pub columns: bool,
    /// Number of columns
    pub column_count: i32,
    /// Space between columns (in twips)
    pub column_spacing: i32,
    /// Draw a line between columns
    pub column_line_between: bool,
}

impl Default for SectionFormat {
    fn default() -> Self {
        Self {
            section_break: SectionBreak::Continuous,
            new_section: false,
            default_section: true,
            page_width: 12240,
            page_height: 15840,
            page_margin_left: 1800,
            page_margin_right: 1800,
            page_margin_top: 1440,
            page_margin_bottom: 1440,
            page_gutter_width: 0,
            header_offset: 720, // 0.5 inches
            footer_offset: 720,
            show_page_number: false,
            page_number_offset_x: 720,
            page_number_offset_y: 720,
            columns: false,
            column_count: 1,
            column_spacing: 720,
            column_line_between: false,
        }
    }
}

impl SectionFormat {
    /// Write the section formatting block, starting on a new line.
    pub fn write_rtf(&self, buf: &mut String) {
        buf.push('\n');

        if self.new_section {
            push_word(buf, "sect");
        }
        if self.default_section {
            push_word(buf, "sectd");
        }
        if self.show_page_number {
            push_word_param(buf, "pgnx", self.page_number_offset_x);
            push_word_param(buf, "pgny", self.page_number_offset_y);
        }

        push_word(buf, self.section_break.control_word());

        if self.columns {
            push_word_param(buf, "cols", self.column_count);
            push_word_param(buf, "colsx", self.column_spacing);
            if self.column_line_between {
                push_word(buf, "linebetcol");
            }
        }

        push_word_param(buf, "pgwsxn", self.page_width);
        push_word_param(buf, "pghsxn", self.page_height);
        push_word_param(buf, "marglsxn", self.page_margin_left);
        push_word_param(buf, "margrsxn", self.page_margin_right);
        push_word_param(buf, "margtsxn", self.page_margin_top);
        push_word_param(buf, "margbsxn", self.page_margin_bottom);
        push_word_param(buf, "guttersxn", self.page_gutter_width);
        push_word_param(buf, "headery", self.header_offset);
        push_word_param(buf, "footery", self.footer_offset);
    }

    /// Render the section formatting block to a new string.
    pub fn to_rtf(&self) -> String {
        let mut buf = String::with_capacity(192);
        self.write_rtf(&mut buf);
        buf
    }
}
