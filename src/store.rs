//! The current pen state.
//!
//! [`FormatStore`] owns the font and color tables and one current value of
//! each format record. Setters replace a whole record and write nothing; the
//! `*_mut` getters allow read-modify-write, and every change is picked up by
//! the next block the writer emits.

use crate::options::FormatPreset;
use crate::paragraph::ParagraphFormat;
use crate::section::{DocumentFormat, SectionFormat};
use crate::table::{TableCellFormat, TableRowFormat};
use crate::types::{ColorTable, FontTable};

/// Font/color tables and the five current format records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatStore {
    font_table: FontTable,
    color_table: ColorTable,
    document: DocumentFormat,
    section: SectionFormat,
    paragraph: ParagraphFormat,
    table_row: TableRowFormat,
    table_cell: TableCellFormat,
}

impl FormatStore {
    /// Create a store holding the default tables and records.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset tables and records to the defaults.
    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// Reset all five records to the defaults, keeping the tables.
    pub fn set_default_format(&mut self) {
        self.apply_preset(FormatPreset::default());
    }

    /// Replace all five records with the ones in `preset`.
    pub fn apply_preset(&mut self, preset: FormatPreset) {
        self.document = preset.document;
        self.section = preset.section;
        self.paragraph = preset.paragraph;
        self.table_row = preset.table_row;
        self.table_cell = preset.table_cell;
    }

    /// Snapshot of the five current records.
    pub fn preset(&self) -> FormatPreset {
        FormatPreset {
            document: self.document,
            section: self.section,
            paragraph: self.paragraph.clone(),
            table_row: self.table_row,
            table_cell: self.table_cell,
        }
    }

    /// Replace the font table from a semicolon-delimited list of names.
    ///
    /// An empty list, or one with no names in it (`";;"`), keeps the current
    /// table so that `\deff0` and `\f0` always refer to a font.
    pub fn set_font_table(&mut self, fonts: &str) {
        if fonts.trim().is_empty() {
            return;
        }
        let table = FontTable::parse(fonts);
        if table.fonts().is_empty() {
            log::warn!("Font list {:?} names no fonts, keeping the current table", fonts);
            return;
        }
        self.font_table = table;
    }

    /// Replace the color table from a delimited list of RGB components.
    ///
    /// An empty list keeps the current table.
    pub fn set_color_table(&mut self, colors: &str) {
        if colors.trim().is_empty() {
            return;
        }
        self.color_table = ColorTable::parse(colors);
    }

    /// Current font table.
    #[inline]
    pub fn font_table(&self) -> &FontTable {
        &self.font_table
    }

    /// Current color table.
    #[inline]
    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    /// Current document format.
    #[inline]
    pub fn document_format(&self) -> &DocumentFormat {
        &self.document
    }

    /// Mutable access to the document format.
    #[inline]
    pub fn document_format_mut(&mut self) -> &mut DocumentFormat {
        &mut self.document
    }

    /// Replace the document format.
    #[inline]
    pub fn set_document_format(&mut self, format: DocumentFormat) {
        self.document = format;
    }

    /// Current section format.
    #[inline]
    pub fn section_format(&self) -> &SectionFormat {
        &self.section
    }

    /// Mutable access to the section format.
    #[inline]
    pub fn section_format_mut(&mut self) -> &mut SectionFormat {
        &mut self.section
    }

    /// Replace the section format.
    #[inline]
    pub fn set_section_format(&mut self, format: SectionFormat) {
        self.section = format;
    }

    /// Current paragraph format.
    #[inline]
    pub fn paragraph_format(&self) -> &ParagraphFormat {
        &self.paragraph
    }

    /// Mutable access to the paragraph format.
    #[inline]
    pub fn paragraph_format_mut(&mut self) -> &mut ParagraphFormat {
        &mut self.paragraph
    }

    /// Replace the paragraph format.
    #[inline]
    pub fn set_paragraph_format(&mut self, format: ParagraphFormat) {
        self.paragraph = format;
    }

    /// Current table row format.
    #[inline]
    pub fn table_row_format(&self) -> &TableRowFormat {
        &self.table_row
    }

    /// Mutable access to the table row format.
    #[inline]
    pub fn table_row_format_mut(&mut self) -> &mut TableRowFormat {
        &mut self.table_row
    }

    /// Replace the table row format.
    #[inline]
    pub fn set_table_row_format(&mut self, format: TableRowFormat) {
        self.table_row = format;
    }

    /// Current table cell format.
    #[inline]
    pub fn table_cell_format(&self) -> &TableCellFormat {
        &self.table_cell
    }

    /// Mutable access to the table cell format.
    #[inline]
    pub fn table_cell_format_mut(&mut self) -> &mut TableCellFormat {
        &mut self.table_cell
    }

    /// Replace the table cell format.
    #[inline]
    pub fn set_table_cell_format(&mut self, format: TableCellFormat) {
        self.table_cell = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::Alignment;
    use crate::types::Color;

    #[test]
    fn test_paragraph_getter_is_stable() {
        let store = FormatStore::new();
        let first = store.paragraph_format().clone();
        let second = store.paragraph_format().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_setter_replaces_whole_record() {
        let mut store = FormatStore::new();
        store.paragraph_format_mut().character.bold = true;
        store.paragraph_format_mut().has_shading = true;

        store.set_paragraph_format(ParagraphFormat {
            alignment: Alignment::Right,
            ..Default::default()
        });
        let paragraph = store.paragraph_format();
        assert_eq!(paragraph.alignment, Alignment::Right);
        assert!(!paragraph.character.bold);
        assert!(!paragraph.has_shading);
    }

    #[test]
    fn test_init_resets_everything() {
        let mut store = FormatStore::new();
        store.set_font_table("Arial");
        store.set_color_table("1,2,3");
        store.section_format_mut().columns = true;
        store.init();
        assert_eq!(store, FormatStore::default());
        assert_eq!(store.font_table().fonts().len(), 7);
    }

    #[test]
    fn test_empty_lists_keep_tables() {
        let mut store = FormatStore::new();
        store.set_font_table("");
        store.set_color_table("  ");
        assert_eq!(store.font_table().fonts().len(), 7);
        assert_eq!(store.color_table().colors().len(), 15);

        store.set_font_table(" ; ;; ");
        assert_eq!(store.font_table(), &FontTable::default());

        store.set_color_table("9;8;7");
        assert_eq!(store.color_table().colors(), &[Color::new(9, 8, 7)]);
    }

    #[test]
    fn test_preset_snapshot() {
        let mut store = FormatStore::new();
        store.table_row_format_mut().height = 500;
        let preset = store.preset();
        assert_eq!(preset.table_row.height, 500);

        store.set_default_format();
        assert_eq!(store.table_row_format().height, 0);
        store.apply_preset(preset);
        assert_eq!(store.table_row_format().height, 500);
    }
}
