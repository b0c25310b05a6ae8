//! Paragraph and character formatting.
//!
//! A paragraph block carries everything needed to render one run of text:
//! paragraph geometry, optional tab/numbering/border/shading sub-records,
//! the character attributes, and the text itself. Sub-records are rendered
//! only when their `has_*` flag is set, regardless of their field values.

use crate::border::{BorderFormat, ShadingFormat};
use crate::control::{
    push_encoded_text, push_optional_word, push_toggle, push_word, push_word_param, word_for_code,
};
use crate::encoding::CodePage;
use crate::types::{ColorRef, FontRef};
use serde::{Deserialize, Serialize};

static PARAGRAPH_BREAK_WORDS: [&str; 4] = ["", "page", "column", "line"];

static ALIGNMENT_WORDS: [&str; 4] = ["ql", "qc", "qr", "qj"];

static TAB_KIND_WORDS: [&str; 4] = ["", "tqc", "tqr", "tqdec"];

static TAB_LEAD_WORDS: [&str; 7] = ["", "tldot", "tlmdot", "tlhyph", "tlul", "tlth", "tleq"];

static UNDERLINE_WORDS: [&str; 18] = [
    "ulnone",
    "ul",
    "uld",
    "uldash",
    "uldashd",
    "uldashdd",
    "uldb",
    "ulhwave",
    "ulldash",
    "ulth",
    "ulthd",
    "ulthdash",
    "ulthdashd",
    "ulthdashdd",
    "ulthldash",
    "ululdbwave",
    "ulw",
    "ulwave",
];

/// Break emitted at the start of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum ParagraphBreak {
    /// No break
    #[default]
    None = 0,
    /// Page break
    Page = 1,
    /// Column break
    Column = 2,
    /// Line break
    Line = 3,
}

impl ParagraphBreak {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Page,
            2 => Self::Column,
            3 => Self::Line,
            _ => return None,
        })
    }

    /// Control word without backslash; empty for [`ParagraphBreak::None`].
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&PARAGRAPH_BREAK_WORDS, self as i32)
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum Alignment {
    /// Left aligned
    #[default]
    Left = 0,
    /// Centered
    Center = 1,
    /// Right aligned
    Right = 2,
    /// Justified
    Justify = 3,
}

impl Alignment {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Justify,
            _ => return None,
        })
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&ALIGNMENT_WORDS, self as i32)
    }
}

/// Tab stop alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum TabKind {
    /// Plain (left) tab, no control word
    #[default]
    None = 0,
    /// Centered tab
    Center = 1,
    /// Flush-right tab
    Right = 2,
    /// Decimal tab
    Decimal = 3,
}

impl TabKind {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Decimal,
            _ => return None,
        })
    }

    /// Control word without backslash; empty for [`TabKind::None`].
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&TAB_KIND_WORDS, self as i32)
    }
}

/// Tab stop leader character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum TabLead {
    /// No leader
    #[default]
    None = 0,
    /// Dot leader (........)
    Dot = 1,
    /// Middle dot leader
    MiddleDot = 2,
    /// Hyphen leader (--------)
    Hyphen = 3,
    /// Underline leader (________)
    Underline = 4,
    /// Thick line leader
    ThickLine = 5,
    /// Equal sign leader (========)
    Equal = 6,
}

impl TabLead {
    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Dot,
            2 => Self::MiddleDot,
            3 => Self::Hyphen,
            4 => Self::Underline,
            5 => Self::ThickLine,
            6 => Self::Equal,
            _ => return None,
        })
    }

    /// Control word without backslash; empty for [`TabLead::None`].
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&TAB_LEAD_WORDS, self as i32)
    }
}

/// Underline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum UnderlineStyle {
    /// No underline
    #[default]
    None = 0,
    /// Continuous underline
    Single = 1,
    /// Dotted underline
    Dotted = 2,
    /// Dashed underline
    Dashed = 3,
    /// Dash-dotted underline
    DashDot = 4,
    /// Dash-dot-dotted underline
    DashDotDot = 5,
    /// Double underline
    Double = 6,
    /// Heavy wave underline
    HeavyWave = 7,
    /// Long dashed underline
    LongDash = 8,
    /// Thick underline
    Thick = 9,
    /// Thick dotted underline
    ThickDotted = 10,
    /// Thick dashed underline
    ThickDashed = 11,
    /// Thick dash-dotted underline
    ThickDashDot = 12,
    /// Thick dash-dot-dotted underline
    ThickDashDotDot = 13,
    /// Thick long dashed underline
    ThickLongDash = 14,
    /// Double wave underline
    DoubleWave = 15,
    /// Word underline
    Words = 16,
    /// Wave underline
    Wave = 17,
}

impl UnderlineStyle {
    /// All styles in code order.
    pub const ALL: [UnderlineStyle; 18] = [
        Self::None,
        Self::Single,
        Self::Dotted,
        Self::Dashed,
        Self::DashDot,
        Self::DashDotDot,
        Self::Double,
        Self::HeavyWave,
        Self::LongDash,
        Self::Thick,
        Self::ThickDotted,
        Self::ThickDashed,
        Self::ThickDashDot,
        Self::ThickDashDotDot,
        Self::ThickLongDash,
        Self::DoubleWave,
        Self::Words,
        Self::Wave,
    ];

    /// Convert a raw code, returning `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        word_for_code(&UNDERLINE_WORDS, self as i32)
    }
}

/// Tab stop definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabFormat {
    /// Position (in twips from the left margin)
    pub position: i32,
    /// Alignment
    pub kind: TabKind,
    /// Leader character
    pub lead: TabLead,
}

impl TabFormat {
    /// Write tab kind, leader and `\tx<position>`.
    pub fn write_rtf(&self, buf: &mut String) {
        push_optional_word(buf, self.kind.control_word());
        push_optional_word(buf, self.lead.control_word());
        push_word_param(buf, "tx", self.position);
    }
}

/// Bullets and numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingFormat {
    /// Numbering level (11 is a bulleted paragraph)
    pub level: i32,
    /// Distance from the bullet to the text (in twips)
    pub space: i32,
    /// Bullet character
    pub bullet: char,
}

impl Default for NumberingFormat {
    fn default() -> Self {
        Self {
            level: 11,
            space: 360,
            bullet: '\u{2022}',
        }
    }
}

impl NumberingFormat {
    /// Write `{\*\pn\pnlvl<l>\pnsp<s>\pntxtb <bullet>}`.
    pub fn write_rtf(&self, buf: &mut String, code_page: CodePage) {
        buf.push_str("{\\*");
        push_word(buf, "pn");
        push_word_param(buf, "pnlvl", self.level);
        push_word_param(buf, "pnsp", self.space);
        push_word(buf, "pntxtb");
        buf.push(' ');
        let mut utf8 = [0u8; 4];
        push_encoded_text(buf, self.bullet.encode_utf8(&mut utf8), code_page);
        buf.push('}');
    }
}

/// Character attributes of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterFormat {
    /// Text animation effect
    pub animation: i32,
    /// Bold
    pub bold: bool,
    /// All capitals
    pub caps: bool,
    /// Background color table index
    pub background_color: ColorRef,
    /// Foreground color table index
    pub foreground_color: ColorRef,
    /// Horizontal scaling in percent
    pub scale: i32,
    /// Embossed
    pub emboss: bool,
    /// Expansion or compression of character spacing (in twips)
    pub expand: i32,
    /// Font table index
    pub font: FontRef,
    /// Font size (in half-points)
    pub font_size: i32,
    /// Italic
    pub italic: bool,
    /// Engraved
    pub engrave: bool,
    /// Kerning threshold (in half-points)
    pub kerning: i32,
    /// Outline
    pub outline: bool,
    /// Small capitals
    pub small_caps: bool,
    /// Shadow
    pub shadow: bool,
    /// Strikethrough
    pub strike: bool,
    /// Double strikethrough
    pub double_strike: bool,
    /// Subscript
    pub subscript: bool,
    /// Superscript
    pub superscript: bool,
    /// Underline style
    pub underline: UnderlineStyle,
}

impl Default for CharacterFormat {
    fn default() -> Self {
        Self {
            animation: 0,
            bold: false,
            caps: false,
            background_color: 0,
            foreground_color: 0,
            scale: 100,
            emboss: false,
            expand: 0,
            font: 0,
            font_size: 24,
            italic: false,
            engrave: false,
            kerning: 0,
            outline: false,
            small_caps: false,
            shadow: false,
            strike: false,
            double_strike: false,
            subscript: false,
            superscript: false,
            underline: UnderlineStyle::None,
        }
    }
}

impl CharacterFormat {
    /// Write the character attributes.
    ///
    /// Attributes with an RTF on/off pair always write one of the two, so a
    /// block never inherits a toggle from the previous one.
    pub fn write_rtf(&self, buf: &mut String) {
        push_word_param(buf, "animtext", self.animation);
        push_word_param(buf, "expndtw", self.expand);
        push_word_param(buf, "kerning", self.kerning);
        push_word_param(buf, "charscalex", self.scale);
        push_word_param(buf, "f", self.font);
        push_word_param(buf, "fs", self.font_size);
        push_word_param(buf, "cf", self.foreground_color);
        push_word_param(buf, "cb", self.background_color);

        push_toggle(buf, self.bold, "b", "b0");
        push_toggle(buf, self.caps, "caps", "caps0");
        push_toggle(buf, self.double_strike, "striked1", "striked0");
        if self.emboss {
            push_word(buf, "embo");
        }
        if self.engrave {
            push_word(buf, "impr");
        }
        push_toggle(buf, self.italic, "i", "i0");
        push_toggle(buf, self.outline, "outl", "outl0");
        push_toggle(buf, self.shadow, "shad", "shad0");
        push_toggle(buf, self.small_caps, "scaps", "scaps0");
        push_toggle(buf, self.strike, "strike", "strike0");
        if self.subscript {
            push_word(buf, "sub");
        }
        if self.superscript {
            push_word(buf, "super");
        }

        push_word(buf, self.underline.control_word());
    }
}

/// Paragraph formatting plus the paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphFormat {
    /// Break written before the paragraph
    pub paragraph_break: ParagraphBreak,
    /// End the previous paragraph (`\par`)
    pub new_paragraph: bool,
    /// Reset to default paragraph properties (`\pard`)
    pub default_paragraph: bool,
    /// Alignment
    pub alignment: Alignment,
    /// First line indent (in twips)
    pub first_line_indent: i32,
    /// Left indent (in twips)
    pub left_indent: i32,
    /// Right indent (in twips)
    pub right_indent: i32,
    /// Space before (in twips)
    pub space_before: i32,
    /// Space after (in twips)
    pub space_after: i32,
    /// Line spacing (in twips, 0 is automatic)
    pub line_spacing: i32,
    /// Paragraph text, replaced on every `start_paragraph`
    pub text: String,
    /// Write the text as a tabbed continuation (`\tab <text>`) only
    pub tabbed_text: bool,
    /// Paragraph lives inside a table cell (`\intbl` instead of `\plain`)
    pub table_text: bool,
    /// Render [`ParagraphFormat::tabs`]
    pub has_tabs: bool,
    /// Tab stop
    pub tabs: TabFormat,
    /// Render [`ParagraphFormat::numbering`]
    pub has_numbering: bool,
    /// Bullets and numbering
    pub numbering: NumberingFormat,
    /// Render [`ParagraphFormat::borders`]
    pub has_borders: bool,
    /// Paragraph border
    pub borders: BorderFormat,
    /// Render [`ParagraphFormat::shading`]
    pub has_shading: bool,
    /// Paragraph shading
    pub shading: ShadingFormat,
    /// Character attributes
    pub character: CharacterFormat,
}

impl Default for ParagraphFormat {
    fn default() -> Self {
        Self {
            paragraph_break: ParagraphBreak::None,
            new_paragraph: false,
            default_paragraph: true,
            alignment: Alignment::Left,
            first_line_indent: 0,
            left_indent: 0,
            right_indent: 0,
            space_before: 0,
            space_after: 0,
            line_spacing: 0,
            text: String::new(),
            tabbed_text: false,
            table_text: false,
            has_tabs: false,
            tabs: TabFormat::default(),
            has_numbering: false,
            numbering: NumberingFormat::default(),
            has_borders: false,
            borders: BorderFormat::default(),
            has_shading: false,
            shading: ShadingFormat::default(),
            character: CharacterFormat::default(),
        }
    }
}

impl ParagraphFormat {
    /// Write the paragraph block including its text.
    ///
    /// A tabbed paragraph writes only `\tab ` and the text, continuing the
    /// current paragraph with its formatting unchanged. Non-ASCII text takes
    /// its fallback bytes from `code_page`.
    pub fn write_rtf(&self, buf: &mut String, code_page: CodePage) {
        if self.tabbed_text {
            push_word(buf, "tab");
            buf.push(' ');
            push_encoded_text(buf, &self.text, code_page);
            return;
        }

        buf.push('\n');
        if self.new_paragraph {
            push_word(buf, "par");
        }
        if self.default_paragraph {
            push_word(buf, "pard");
        }
        push_word(buf, if self.table_text { "intbl" } else { "plain" });
        push_optional_word(buf, self.paragraph_break.control_word());
        push_word(buf, self.alignment.control_word());

        if self.has_tabs {
            self.tabs.write_rtf(buf);
        }
        if self.has_numbering {
            self.numbering.write_rtf(buf, code_page);
        }
        if self.has_borders {
            self.borders.write_paragraph_border(buf);
        }
        if self.has_shading {
            self.shading.write_paragraph_shading(buf);
        }

        push_word_param(buf, "fi", self.first_line_indent);
        push_word_param(buf, "li", self.left_indent);
        push_word_param(buf, "ri", self.right_indent);
        push_word_param(buf, "sb", self.space_before);
        push_word_param(buf, "sa", self.space_after);
        push_word_param(buf, "sl", self.line_spacing);

        self.character.write_rtf(buf);

        buf.push(' ');
        push_encoded_text(buf, &self.text, code_page);
    }

    /// Render the paragraph block for a Windows-1252 document.
    pub fn to_rtf(&self) -> String {
        let mut buf = String::with_capacity(256 + self.text.len());
        self.write_rtf(&mut buf, CodePage::default());
        buf
    }
}
