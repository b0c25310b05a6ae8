//! Font and color tables.
//!
//! Both tables are built once when a document is opened, either from the
//! built-in defaults or from caller-supplied delimiter-separated lists, and
//! are referenced by index from the character, border and shading records.

use crate::control::{push_encoded_text, push_word, push_word_param};
use crate::encoding::CodePage;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Font reference (index into the font table).
///
/// Indices are not validated against the table.
pub type FontRef = i32;

/// Color reference (index into the color table).
///
/// Indices are not validated against the table.
pub type ColorRef = i32;

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Write `\red<r>\green<g>\blue<b>;`.
    pub fn write_entry(&self, buf: &mut String) {
        push_word_param(buf, "red", i32::from(self.red));
        push_word_param(buf, "green", i32::from(self.green));
        push_word_param(buf, "blue", i32::from(self.blue));
        buf.push(';');
    }
}

/// Built-in palette used when no color list is given.
const DEFAULT_COLORS: [Color; 15] = [
    Color::new(0, 0, 0),
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    Color::new(255, 255, 0),
    Color::new(255, 0, 255),
    Color::new(0, 255, 255),
    Color::new(255, 255, 255),
    Color::new(128, 0, 0),
    Color::new(0, 128, 0),
    Color::new(0, 0, 128),
    Color::new(128, 128, 0),
    Color::new(128, 0, 128),
    Color::new(0, 128, 128),
    Color::new(128, 128, 128),
];

/// Color table containing document colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Create an empty color table.
    #[inline]
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Add a color to the table and return its index.
    #[inline]
    pub fn add(&mut self, color: Color) -> ColorRef {
        let index = self.colors.len() as ColorRef;
        self.colors.push(color);
        index
    }

    /// Get a color by reference.
    #[inline]
    pub fn get(&self, color_ref: ColorRef) -> Option<&Color> {
        usize::try_from(color_ref)
            .ok()
            .and_then(|index| self.colors.get(index))
    }

    /// Get all colors in the table.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Build a table from a delimited component list.
    ///
    /// Components are separated by `;` or `,` and grouped in threes as red,
    /// green, blue, so `"255,0,0;0,0,255"` and `"255;0;0;0;0;255"` both
    /// describe two colors. Empty components are skipped and an incomplete
    /// trailing triple is dropped. Every complete triple keeps its slot, so
    /// color indices never shift: components outside 0..=255 are clamped
    /// and components that are not numbers become 0.
    pub fn parse(list: &str) -> Self {
        let components: Vec<&str> = list
            .split([';', ','])
            .map(str::trim)
            .filter(|component| !component.is_empty())
            .collect();

        let mut table = Self::new();
        let mut triples = components.chunks_exact(3);
        for triple in triples.by_ref() {
            table.add(Color::new(
                parse_component(triple[0]),
                parse_component(triple[1]),
                parse_component(triple[2]),
            ));
        }
        let rest = triples.remainder();
        if !rest.is_empty() {
            log::warn!("Dropping incomplete color table entry: {:?}", rest);
        }

        table
    }

    /// Write the table body (the part inside `{\colortbl ...}`).
    pub fn write_entries(&self, buf: &mut String) {
        for color in &self.colors {
            color.write_entry(buf);
        }
    }
}

fn parse_component(component: &str) -> u8 {
    match component.parse::<i64>() {
        Ok(value) if (0..=255).contains(&value) => value as u8,
        Ok(value) => {
            log::warn!("Clamping color component {} to 0..=255", value);
            value.clamp(0, 255) as u8
        },
        Err(_) => {
            log::warn!("Color component {:?} is not a number, using 0", component);
            0
        },
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

/// Font family categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Nil (unknown or default)
    #[default]
    Nil,
    /// Roman (serif) fonts
    Roman,
    /// Swiss (sans-serif) fonts
    Swiss,
    /// Modern (monospace) fonts
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Bidirectional (Arabic, Hebrew) fonts
    Bidi,
}

impl FontFamily {
    /// Control word without backslash.
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            FontFamily::Nil => "fnil",
            FontFamily::Roman => "froman",
            FontFamily::Swiss => "fswiss",
            FontFamily::Modern => "fmodern",
            FontFamily::Script => "fscript",
            FontFamily::Decor => "fdecor",
            FontFamily::Tech => "ftech",
            FontFamily::Bidi => "fbidi",
        }
    }

    /// Family of a well-known font, [`FontFamily::Nil`] for anything else.
    pub fn for_font_name(name: &str) -> Self {
        KNOWN_FONT_FAMILIES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or_default()
    }
}

/// Families of common fonts, keyed by lowercase name.
static KNOWN_FONT_FAMILIES: phf::Map<&'static str, FontFamily> = phf_map! {
    "times new roman" => FontFamily::Roman,
    "times" => FontFamily::Roman,
    "georgia" => FontFamily::Roman,
    "garamond" => FontFamily::Roman,
    "cambria" => FontFamily::Roman,
    "book antiqua" => FontFamily::Roman,
    "arial" => FontFamily::Swiss,
    "helvetica" => FontFamily::Swiss,
    "verdana" => FontFamily::Swiss,
    "tahoma" => FontFamily::Swiss,
    "calibri" => FontFamily::Swiss,
    "segoe ui" => FontFamily::Swiss,
    "courier new" => FontFamily::Modern,
    "courier" => FontFamily::Modern,
    "consolas" => FontFamily::Modern,
    "lucida console" => FontFamily::Modern,
    "cursive" => FontFamily::Script,
    "comic sans ms" => FontFamily::Script,
    "brush script mt" => FontFamily::Script,
    "old english" => FontFamily::Decor,
    "impact" => FontFamily::Decor,
    "symbol" => FontFamily::Tech,
    "wingdings" => FontFamily::Tech,
    "miriam" => FontFamily::Bidi,
    "david" => FontFamily::Bidi,
    "arabic typesetting" => FontFamily::Bidi,
};

/// Font definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Font name
    pub name: Cow<'static, str>,
    /// Font family category
    pub family: FontFamily,
    /// Character set (Windows charset id)
    pub charset: u8,
}

impl Font {
    /// Create a new font.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, family: FontFamily, charset: u8) -> Self {
        Self {
            name: name.into(),
            family,
            charset,
        }
    }

    /// Write `{\f<index>\f<family>\fcharset<n>\cpg<code page> <name>}`.
    pub fn write_entry(&self, buf: &mut String, index: usize, code_page: CodePage) {
        buf.push('{');
        push_word_param(buf, "f", index as i32);
        push_word(buf, self.family.control_word());
        push_word_param(buf, "fcharset", i32::from(self.charset));
        push_word_param(buf, "cpg", i32::from(code_page.number()));
        buf.push(' ');
        push_encoded_text(buf, &self.name, code_page);
        buf.push('}');
    }
}

/// Font table containing document fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    fonts: Vec<Font>,
}

impl FontTable {
    /// Create an empty font table.
    #[inline]
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Add a font and return its index.
    #[inline]
    pub fn add(&mut self, font: Font) -> FontRef {
        let index = self.fonts.len() as FontRef;
        self.fonts.push(font);
        index
    }

    /// Get a font by reference.
    #[inline]
    pub fn get(&self, font_ref: FontRef) -> Option<&Font> {
        usize::try_from(font_ref)
            .ok()
            .and_then(|index| self.fonts.get(index))
    }

    /// Get all fonts in the table.
    #[inline]
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Build a table from a semicolon-delimited list of font names.
    ///
    /// Empty entries, such as those produced by a trailing or doubled
    /// delimiter, are skipped, so indices always run from 0 without gaps.
    /// A list with no names at all yields an empty table.
    pub fn parse(list: &str) -> Self {
        let mut table = Self::new();
        for name in list.split(';').map(str::trim) {
            if name.is_empty() {
                continue;
            }
            let family = FontFamily::for_font_name(name);
            table.add(Font::new(name.to_owned(), family, 0));
        }
        table
    }

    /// Write the table body (the part inside `{\fonttbl ...}`).
    pub fn write_entries(&self, buf: &mut String, code_page: CodePage) {
        for (index, font) in self.fonts.iter().enumerate() {
            font.write_entry(buf, index, code_page);
        }
    }
}

impl Default for FontTable {
    fn default() -> Self {
        let fonts = [
            ("Times New Roman", FontFamily::Roman),
            ("Arial", FontFamily::Swiss),
            ("Courier New", FontFamily::Modern),
            ("Cursive", FontFamily::Script),
            ("Old English", FontFamily::Decor),
            ("Symbol", FontFamily::Tech),
            ("Miriam", FontFamily::Bidi),
        ];
        Self {
            fonts: fonts
                .into_iter()
                .map(|(name, family)| Font::new(name, family, 0))
                .collect(),
        }
    }
}
