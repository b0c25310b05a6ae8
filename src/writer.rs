//! RTF document writer.
//!
//! [`RtfWriter`] turns the current pen state into RTF blocks and appends them
//! to its sink in call order. Every block is assembled in full and written
//! with a single `write_all`; a short or failed write is reported with the
//! error of the stage that issued it and is never retried.
//!
//! # Example
//!
//! ```
//! use rtf_writer::{Alignment, RtfWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = RtfWriter::new(&mut output);
//!     writer.open(None, None)?;
//!     writer.paragraph_format_mut().alignment = Alignment::Center;
//!     writer.paragraph_format_mut().character.bold = true;
//!     writer.start_paragraph("Title", false)?;
//!     writer.set_paragraph_format(Default::default());
//!     writer.start_paragraph("Body text", true)?;
//!     writer.finish()?;
//! }
//! let rtf = String::from_utf8(output).unwrap();
//! assert!(rtf.starts_with("{\\rtf1\\ansi"));
//! assert!(rtf.ends_with("\\par}"));
//! # Ok::<(), rtf_writer::RtfError>(())
//! ```

use crate::control::{push_encoded_text, push_word, push_word_param};
use crate::encoding::CodePage;
use crate::error::{RtfError, RtfResult};
use crate::options::{FormatPreset, WriterOptions};
use crate::paragraph::ParagraphFormat;
use crate::section::{DocumentFormat, SectionFormat};
use crate::store::FormatStore;
use crate::table::{TableCellFormat, TableRowFormat};
use crate::types::{ColorTable, FontTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Written once when an open document is closed.
const CLOSING_SEQUENCE: &str = "\n\\par}";

/// Where the writer is in the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Nothing written yet
    Closed,
    /// Header, document format and first section written
    Opened,
    /// Inside a table row, between cells
    InTableRow,
    /// Inside a table cell
    InTableCell,
    /// Closing sequence written
    Finished,
}

impl WriterState {
    /// Whether the closing sequence is still owed.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(
            self,
            WriterState::Opened | WriterState::InTableRow | WriterState::InTableCell
        )
    }

    fn describe(self) -> &'static str {
        match self {
            WriterState::Closed => "the document is not open",
            WriterState::Opened => "no table row is open",
            WriterState::InTableRow => "a table row is open",
            WriterState::InTableCell => "a table cell is open",
            WriterState::Finished => "the document is finished",
        }
    }
}

/// RTF document writer
pub struct RtfWriter<W: Write> {
    /// Output writer
    writer: W,
    /// Writer options
    options: WriterOptions,
    /// Tables and current format records
    store: FormatStore,
    /// Code page resolved from `options.code_page`
    code_page: CodePage,
    /// Position in the document structure
    state: WriterState,
}

impl RtfWriter<BufWriter<File>> {
    /// Create a writer for a new file at `path`.
    ///
    /// Nothing is written until [`RtfWriter::open`] is called.
    pub fn create<P: AsRef<Path>>(path: P) -> RtfResult<Self> {
        Self::create_with_options(path, WriterOptions::default())
    }

    /// Create a writer for a new file at `path` with options.
    pub fn create_with_options<P: AsRef<Path>>(path: P, options: WriterOptions) -> RtfResult<Self> {
        let file = File::create(path.as_ref()).map_err(RtfError::Open)?;
        Ok(Self::with_options(BufWriter::new(file), options))
    }
}

impl<W: Write> RtfWriter<W> {
    /// Create a new RTF writer
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriterOptions::default())
    }

    /// Create a new RTF writer with options
    pub fn with_options(writer: W, options: WriterOptions) -> Self {
        let code_page = CodePage::new(options.code_page);
        if !code_page.is_supported() {
            log::warn!(
                "Unknown code page {}, non-ASCII text will fall back to '?'",
                options.code_page
            );
        }
        Self {
            writer,
            code_page,
            options,
            store: FormatStore::new(),
            state: WriterState::Closed,
        }
    }

    /// Current position in the document structure.
    #[inline]
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Writer options.
    #[inline]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Tables and current format records.
    #[inline]
    pub fn store(&self) -> &FormatStore {
        &self.store
    }

    /// Mutable access to the tables and current format records.
    #[inline]
    pub fn store_mut(&mut self) -> &mut FormatStore {
        &mut self.store
    }

    /// Open the document.
    ///
    /// Builds the font and color tables from the given lists (`None` or an
    /// empty list keeps the store's table, initially the built-in one), then
    /// writes the header, the document format and the
    /// first section format. The first failing stage aborts the sequence and
    /// the writer stays closed.
    pub fn open(&mut self, fonts: Option<&str>, colors: Option<&str>) -> RtfResult<()> {
        self.expect_state("open the document", &[WriterState::Closed])?;

        if let Some(fonts) = fonts {
            self.store.set_font_table(fonts);
        }
        if let Some(colors) = colors {
            self.store.set_color_table(colors);
        }

        let mut buf = String::with_capacity(1024);
        self.write_header(&mut buf);
        self.write_block(&buf, RtfError::Header)?;

        buf.clear();
        self.store.document_format().write_rtf(&mut buf);
        self.write_block(&buf, RtfError::DocumentFormat)?;

        buf.clear();
        self.store.section_format().write_rtf(&mut buf);
        self.write_block(&buf, RtfError::SectionFormat)?;

        self.state = WriterState::Opened;
        log::debug!(
            "Opened RTF document with {} fonts and {} colors",
            self.store.font_table().fonts().len(),
            self.store.color_table().colors().len()
        );
        Ok(())
    }

    /// Write document header
    fn write_header(&self, buf: &mut String) {
        buf.push('{');
        push_word_param(buf, "rtf", 1);
        push_word(buf, "ansi");
        push_word_param(buf, "ansicpg", i32::from(self.code_page.number()));
        push_word_param(buf, "deff", 0);

        buf.push('{');
        push_word(buf, "fonttbl");
        self.store.font_table().write_entries(buf, self.code_page);
        buf.push('}');

        buf.push('{');
        push_word(buf, "colortbl");
        self.store.color_table().write_entries(buf);
        buf.push('}');

        buf.push_str("{\\*");
        push_word(buf, "generator");
        buf.push(' ');
        push_encoded_text(buf, &self.options.generator, self.code_page);
        buf.push_str(";}");

        if self.options.author.is_some() || self.options.company.is_some() {
            buf.push_str("\n{");
            push_word(buf, "info");
            for (word, value) in [
                ("author", &self.options.author),
                ("company", &self.options.company),
            ] {
                if let Some(value) = value {
                    buf.push('{');
                    push_word(buf, word);
                    buf.push(' ');
                    push_encoded_text(buf, value, self.code_page);
                    buf.push('}');
                }
            }
            buf.push('}');
        }
    }

    /// Start a new section with the current section format.
    ///
    /// The previous section ends implicitly.
    pub fn start_section(&mut self) -> RtfResult<()> {
        self.expect_state("start a section", &[WriterState::Opened])?;

        self.store.section_format_mut().new_section = true;
        let mut buf = String::with_capacity(192);
        self.store.section_format().write_rtf(&mut buf);
        self.write_block(&buf, RtfError::SectionFormat)?;

        log::debug!("Started section");
        Ok(())
    }

    /// Write a paragraph with the current paragraph format.
    ///
    /// `text` replaces the previous paragraph text. `new_paragraph` ends the
    /// previous paragraph first (`\par`).
    pub fn start_paragraph(&mut self, text: &str, new_paragraph: bool) -> RtfResult<()> {
        self.expect_state(
            "start a paragraph",
            &[
                WriterState::Opened,
                WriterState::InTableRow,
                WriterState::InTableCell,
            ],
        )?;

        let paragraph = self.store.paragraph_format_mut();
        paragraph.text = text.to_owned();
        paragraph.new_paragraph = new_paragraph;

        let mut buf = String::with_capacity(256 + text.len());
        self.store.paragraph_format().write_rtf(&mut buf, self.code_page);
        self.write_block(&buf, RtfError::ParagraphFormat)
    }

    /// Start a table row with the current row format.
    pub fn start_table_row(&mut self) -> RtfResult<()> {
        self.expect_state("start a table row", &[WriterState::Opened])?;

        let mut buf = String::with_capacity(192);
        self.store.table_row_format().write_row_start(&mut buf);
        self.write_block(&buf, RtfError::Table)?;

        self.state = WriterState::InTableRow;
        Ok(())
    }

    /// End the current table row.
    pub fn end_table_row(&mut self) -> RtfResult<()> {
        self.expect_state("end a table row", &[WriterState::InTableRow])?;

        let mut buf = String::with_capacity(32);
        TableRowFormat::write_row_end(&mut buf);
        self.write_block(&buf, RtfError::Table)?;

        self.state = WriterState::Opened;
        Ok(())
    }

    /// Start a table cell with the current cell format.
    ///
    /// `right_boundary` is the cell's right edge in twips. Boundaries within
    /// a row should increase; this is not checked.
    pub fn start_table_cell(&mut self, right_boundary: i32) -> RtfResult<()> {
        self.expect_state("start a table cell", &[WriterState::InTableRow])?;

        let mut buf = String::with_capacity(256);
        self.store
            .table_cell_format()
            .write_cell_start(&mut buf, right_boundary);
        self.write_block(&buf, RtfError::Table)?;

        self.state = WriterState::InTableCell;
        Ok(())
    }

    /// End the current table cell.
    pub fn end_table_cell(&mut self) -> RtfResult<()> {
        self.expect_state("end a table cell", &[WriterState::InTableCell])?;

        let mut buf = String::with_capacity(16);
        TableCellFormat::write_cell_end(&mut buf);
        self.write_block(&buf, RtfError::Table)?;

        self.state = WriterState::InTableRow;
        Ok(())
    }

    /// Write the closing sequence and flush the sink.
    ///
    /// Dropping an open writer does the same, but can only log failures.
    pub fn finish(&mut self) -> RtfResult<()> {
        if !self.state.is_open() {
            return Err(self.sequence_error("finish the document"));
        }
        if self.state != WriterState::Opened {
            log::warn!("Finishing RTF document while {}", self.state.describe());
        }

        self.state = WriterState::Finished;
        self.write_block(CLOSING_SEQUENCE, RtfError::Close)?;
        self.writer.flush().map_err(RtfError::Close)?;

        log::debug!("Finished RTF document");
        Ok(())
    }

    /// Current font table.
    pub fn font_table(&self) -> &FontTable {
        self.store.font_table()
    }

    /// Replace the font table from a semicolon-delimited list of names.
    ///
    /// The tables are written by [`RtfWriter::open`]; later changes are not
    /// reflected in the document.
    pub fn set_font_table(&mut self, fonts: &str) {
        self.store.set_font_table(fonts);
    }

    /// Current color table.
    pub fn color_table(&self) -> &ColorTable {
        self.store.color_table()
    }

    /// Replace the color table from a list of `R,G,B` triples.
    ///
    /// The tables are written by [`RtfWriter::open`]; later changes are not
    /// reflected in the document.
    pub fn set_color_table(&mut self, colors: &str) {
        self.store.set_color_table(colors);
    }

    /// Replace all five format records with the ones in `preset`.
    pub fn apply_preset(&mut self, preset: FormatPreset) {
        self.store.apply_preset(preset);
    }

    /// Current document format.
    pub fn document_format(&self) -> &DocumentFormat {
        self.store.document_format()
    }

    /// Mutable access to the document format.
    pub fn document_format_mut(&mut self) -> &mut DocumentFormat {
        self.store.document_format_mut()
    }

    /// Replace the document format. Takes effect when the document is opened.
    pub fn set_document_format(&mut self, format: DocumentFormat) {
        self.store.set_document_format(format);
    }

    /// Current section format.
    pub fn section_format(&self) -> &SectionFormat {
        self.store.section_format()
    }

    /// Mutable access to the section format.
    pub fn section_format_mut(&mut self) -> &mut SectionFormat {
        self.store.section_format_mut()
    }

    /// Replace the section format used by the next section.
    pub fn set_section_format(&mut self, format: SectionFormat) {
        self.store.set_section_format(format);
    }

    /// Current paragraph format.
    pub fn paragraph_format(&self) -> &ParagraphFormat {
        self.store.paragraph_format()
    }

    /// Mutable access to the paragraph format.
    pub fn paragraph_format_mut(&mut self) -> &mut ParagraphFormat {
        self.store.paragraph_format_mut()
    }

    /// Replace the paragraph format used by the next paragraph.
    pub fn set_paragraph_format(&mut self, format: ParagraphFormat) {
        self.store.set_paragraph_format(format);
    }

    /// Current table row format.
    pub fn table_row_format(&self) -> &TableRowFormat {
        self.store.table_row_format()
    }

    /// Mutable access to the table row format.
    pub fn table_row_format_mut(&mut self) -> &mut TableRowFormat {
        self.store.table_row_format_mut()
    }

    /// Replace the table row format used by the next row.
    pub fn set_table_row_format(&mut self, format: TableRowFormat) {
        self.store.set_table_row_format(format);
    }

    /// Current table cell format.
    pub fn table_cell_format(&self) -> &TableCellFormat {
        self.store.table_cell_format()
    }

    /// Mutable access to the table cell format.
    pub fn table_cell_format_mut(&mut self) -> &mut TableCellFormat {
        self.store.table_cell_format_mut()
    }

    /// Replace the table cell format used by the next cell.
    pub fn set_table_cell_format(&mut self, format: TableCellFormat) {
        self.store.set_table_cell_format(format);
    }

    fn expect_state(&self, operation: &'static str, allowed: &[WriterState]) -> RtfResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(self.sequence_error(operation))
        }
    }

    fn sequence_error(&self, operation: &'static str) -> RtfError {
        match self.state {
            WriterState::Closed => RtfError::NotOpen,
            state => RtfError::OutOfSequence {
                operation,
                state: state.describe(),
            },
        }
    }

    /// Write one complete block.
    fn write_block(&mut self, block: &str, stage: fn(io::Error) -> RtfError) -> RtfResult<()> {
        log::trace!("Writing {} byte RTF block", block.len());
        self.writer.write_all(block.as_bytes()).map_err(stage)
    }
}

impl<W: Write> Drop for RtfWriter<W> {
    fn drop(&mut self) {
        if self.state.is_open() {
            if let Err(e) = self.finish() {
                log::warn!("Failed to close RTF document: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{BorderType, TableBorder};

    const DEFAULT_HEADER_START: &str =
        "{\\rtf1\\ansi\\ansicpg1252\\deff0{\\fonttbl{\\f0\\froman\\fcharset0\\cpg1252 Times New Roman}";

    /// Sink that accepts `limit` bytes and then reports zero-length writes.
    struct ShortSink {
        accepted: Vec<u8>,
        limit: usize,
        calls: Vec<Vec<u8>>,
    }

    impl ShortSink {
        fn new(limit: usize) -> Self {
            Self {
                accepted: Vec::new(),
                limit,
                calls: Vec::new(),
            }
        }
    }

    impl Write for ShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls.push(buf.to_vec());
            let room = self.limit.saturating_sub(self.accepted.len());
            let n = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render<F>(build: F) -> String
    where
        F: FnOnce(&mut RtfWriter<&mut Vec<u8>>) -> RtfResult<()>,
    {
        let mut output = Vec::new();
        {
            let mut writer = RtfWriter::new(&mut output);
            build(&mut writer).unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_hello_document() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_paragraph("Hello", true)
        });

        assert!(rtf.starts_with(DEFAULT_HEADER_START));
        assert!(rtf.contains("{\\*\\generator rtf-writer "));
        assert!(rtf.contains("\\viewkind1\\viewscale100"));
        assert!(rtf.contains("\n\\sectd\\sbknone"));
        assert!(rtf.contains("\n\\par\\pard\\plain\\ql"));
        assert!(rtf.contains("\\ulnone Hello"));
        assert!(rtf.ends_with("Hello\n\\par}"));
        assert_eq!(rtf.matches("\\rtf1").count(), 1);
        assert_eq!(rtf.matches("\\par}").count(), 1);
    }

    #[test]
    fn test_block_order() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_paragraph("x", false)
        });
        let header = rtf.find("{\\colortbl").unwrap();
        let document = rtf.find("\\viewkind").unwrap();
        let section = rtf.find("\\sectd").unwrap();
        let paragraph = rtf.find("\\pard").unwrap();
        assert!(header < document && document < section && section < paragraph);
    }

    #[test]
    fn test_table_row_with_two_cells() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_table_row()?;
            writer.start_table_cell(2000)?;
            writer.end_table_cell()?;
            writer.start_table_cell(4000)?;
            writer.end_table_cell()?;
            writer.end_table_row()
        });

        assert_eq!(rtf.matches("\\trowd").count(), 1);
        assert_eq!(rtf.matches("\\row").count(), 1);
        let trowd = rtf.find("\\trowd").unwrap();
        let first = rtf.find("\\cellx2000").unwrap();
        let second = rtf.find("\\cellx4000").unwrap();
        let row = rtf.find("\\row").unwrap();
        assert!(trowd < first && first < second && second < row);
        assert_eq!(rtf.matches("\n\\cell ").count(), 2);
    }

    #[test]
    fn test_paragraph_inside_cell() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.table_cell_format_mut()
                .set_all_borders(TableBorder::new(BorderType::Double, 10));
            writer.start_table_row()?;
            writer.start_table_cell(3000)?;
            writer.paragraph_format_mut().table_text = true;
            writer.start_paragraph("cell text", false)?;
            writer.end_table_cell()?;
            writer.end_table_row()
        });
        assert!(rtf.contains("\\clbrdrt\\brdrdb\\brdrw10"));
        assert!(rtf.contains("\\pard\\intbl\\ql"));
        assert!(rtf.contains("cell text\n\\cell "));
    }

    #[test]
    fn test_unicode_paragraph() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_paragraph("Grüße", true)
        });
        assert!(rtf.contains("Gr\\u252\\'fc\\u223\\'dfe"));
        assert!(rtf.is_ascii());
    }

    #[test]
    fn test_header_failure_stops_open() {
        let mut sink = ShortSink::new(10);
        {
            let mut writer = RtfWriter::new(&mut sink);
            let err = writer.open(None, None).unwrap_err();
            assert!(matches!(err, RtfError::Header(_)));
            assert_eq!(err.code(), 0x0003);
            assert_eq!(writer.state(), WriterState::Closed);
        }
        assert_eq!(sink.accepted.len(), 10);
        assert!(sink.calls.iter().all(|call| !call.windows(9).any(|w| w == b"\\viewkind")));
        // Never opened, so nothing is written on drop either.
        assert!(!sink.calls.iter().any(|call| call.ends_with(b"\\par}")));
    }

    #[test]
    fn test_paragraph_failure_is_stage_specific() {
        let mut reference = Vec::new();
        {
            let mut writer = RtfWriter::new(&mut reference);
            writer.open(None, None).unwrap();
            writer.finish().unwrap();
        }
        let opened_len = reference.len() - CLOSING_SEQUENCE.len();

        let mut sink = ShortSink::new(opened_len);
        let mut writer = RtfWriter::new(&mut sink);
        writer.open(None, None).unwrap();
        let err = writer.start_paragraph("lost", true).unwrap_err();
        assert!(matches!(err, RtfError::ParagraphFormat(_)));
        let err = writer.start_table_row().unwrap_err();
        assert!(matches!(err, RtfError::Table(_)));
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    /// Byte offsets where the document block starts, where the section
    /// block starts, and where `open` output ends.
    fn open_block_offsets() -> (usize, usize, usize) {
        let rtf = render(|writer| writer.open(None, None));
        let document = rtf.find("\\viewkind").unwrap();
        let section = rtf.find("\n\\sectd").unwrap();
        (document, section, rtf.len() - CLOSING_SEQUENCE.len())
    }

    #[test]
    fn test_document_format_failure_stops_open() {
        let (document, _, _) = open_block_offsets();
        let mut sink = ShortSink::new(document);
        {
            let mut writer = RtfWriter::new(&mut sink);
            let err = writer.open(None, None).unwrap_err();
            assert!(matches!(err, RtfError::DocumentFormat(_)));
            assert_eq!(err.code(), 0x0004);
            assert_eq!(writer.state(), WriterState::Closed);
        }
        assert_eq!(sink.accepted.len(), document);
        assert!(!sink.calls.iter().any(|call| contains(call, b"\\pgwsxn")));
        assert!(!sink.calls.iter().any(|call| contains(call, b"\\par}")));
    }

    #[test]
    fn test_section_format_failure_stops_open() {
        let (_, section, _) = open_block_offsets();
        let mut sink = ShortSink::new(section);
        {
            let mut writer = RtfWriter::new(&mut sink);
            let err = writer.open(None, None).unwrap_err();
            assert!(matches!(err, RtfError::SectionFormat(_)));
            assert_eq!(err.code(), 0x0005);
            assert_eq!(writer.state(), WriterState::Closed);
        }
        assert_eq!(sink.accepted.len(), section);
        assert!(!contains(&sink.accepted, b"\\pgwsxn"));
        assert!(!sink.calls.iter().any(|call| contains(call, b"\\par}")));
    }

    #[test]
    fn test_section_failure_after_open() {
        let (_, _, opened) = open_block_offsets();
        let mut sink = ShortSink::new(opened);
        let mut writer = RtfWriter::new(&mut sink);
        writer.open(None, None).unwrap();
        let err = writer.start_section().unwrap_err();
        assert!(matches!(err, RtfError::SectionFormat(_)));
        assert_eq!(writer.state(), WriterState::Opened);
    }

    #[test]
    fn test_close_failure() {
        let (_, _, opened) = open_block_offsets();
        let mut sink = ShortSink::new(opened);
        {
            let mut writer = RtfWriter::new(&mut sink);
            writer.open(None, None).unwrap();
            let err = writer.finish().unwrap_err();
            assert!(matches!(err, RtfError::Close(_)));
            assert_eq!(err.code(), 0x0002);
            assert_eq!(writer.state(), WriterState::Finished);
        }
        assert_eq!(sink.accepted.len(), opened);
        assert!(!contains(&sink.accepted, b"\\par}"));
        // The failed close is not repeated on drop.
        let closing_attempts = sink
            .calls
            .iter()
            .filter(|call| contains(call, CLOSING_SEQUENCE.as_bytes()))
            .count();
        assert_eq!(closing_attempts, 1);
    }

    #[test]
    fn test_code_page_applies_to_whole_document() {
        let options = WriterOptions {
            code_page: 1251,
            ..Default::default()
        };
        let mut output = Vec::new();
        {
            let mut writer = RtfWriter::with_options(&mut output, options);
            writer.open(Some("Arial"), None).unwrap();
            writer.start_paragraph("é Ж", true).unwrap();
        }
        let rtf = String::from_utf8(output).unwrap();
        assert!(rtf.starts_with(
            "{\\rtf1\\ansi\\ansicpg1251\\deff0{\\fonttbl{\\f0\\fswiss\\fcharset0\\cpg1251 Arial}}"
        ));
        assert!(!rtf.contains("\\cpg1252"));
        assert!(rtf.ends_with(" \\u233? \\u1046\\'c6\n\\par}"));
    }

    #[test]
    fn test_out_of_range_color_keeps_indices() {
        let rtf = render(|writer| {
            writer.open(None, Some("255,0,0;999,0,0;0,0,255"))?;
            writer.paragraph_format_mut().character.foreground_color = 2;
            writer.start_paragraph("blue", false)
        });
        assert!(rtf.contains(
            "{\\colortbl\\red255\\green0\\blue0;\\red255\\green0\\blue0;\\red0\\green0\\blue255;}"
        ));
        assert!(rtf.contains("\\cf2"));
    }

    #[test]
    fn test_custom_tables() {
        let rtf = render(|writer| {
            writer.open(Some("Arial;Verdana;Courier New;"), Some("255,0,0;0,0,255"))?;
            writer.finish()
        });
        assert!(rtf.contains(
            "{\\fonttbl{\\f0\\fswiss\\fcharset0\\cpg1252 Arial}\
             {\\f1\\fswiss\\fcharset0\\cpg1252 Verdana}\
             {\\f2\\fmodern\\fcharset0\\cpg1252 Courier New}}"
        ));
        assert!(rtf.contains("{\\colortbl\\red255\\green0\\blue0;\\red0\\green0\\blue255;}"));
    }

    #[test]
    fn test_empty_lists_use_defaults() {
        let rtf = render(|writer| writer.open(Some(""), Some("")));
        assert!(rtf.starts_with(DEFAULT_HEADER_START));
        assert!(rtf.contains("\\f6\\fbidi"));
        assert_eq!(rtf.matches("\\red").count(), 15);
    }

    #[test]
    fn test_tables_set_before_open() {
        let rtf = render(|writer| {
            writer.set_font_table("Consolas");
            writer.set_color_table("10,20,30");
            writer.open(None, Some(""))
        });
        assert!(rtf.contains("{\\fonttbl{\\f0\\fmodern\\fcharset0\\cpg1252 Consolas}}"));
        assert!(rtf.contains("{\\colortbl\\red10\\green20\\blue30;}"));
    }

    #[test]
    fn test_info_group() {
        let options = WriterOptions {
            author: Some("Zoë".to_string()),
            company: Some("ACME".to_string()),
            ..Default::default()
        };
        let mut output = Vec::new();
        {
            let mut writer = RtfWriter::with_options(&mut output, options);
            writer.open(None, None).unwrap();
        }
        let rtf = String::from_utf8(output).unwrap();
        assert!(rtf.contains("\n{\\info{\\author Zo\\u235\\'eb}{\\company ACME}}"));
    }

    #[test]
    fn test_formats_set_before_open_are_written() {
        let rtf = render(|writer| {
            writer.document_format_mut().read_only = true;
            writer.section_format_mut().columns = true;
            writer.section_format_mut().column_count = 3;
            writer.open(None, None)
        });
        assert!(rtf.contains("\\gutter0\\annotprot\n\\sectd\\sbknone\\cols3\\colsx720"));
    }

    #[test]
    fn test_sections() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_paragraph("one", false)?;
            writer.section_format_mut().section_break = crate::SectionBreak::Page;
            writer.start_section()?;
            writer.start_paragraph("two", true)?;
            writer.start_section()
        });
        assert_eq!(rtf.matches("\\sectd").count(), 3);
        assert_eq!(rtf.matches("\n\\sect\\sectd\\sbkpage").count(), 2);
    }

    #[test]
    fn test_tabbed_continuation() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.start_paragraph("Name", true)?;
            writer.paragraph_format_mut().tabbed_text = true;
            writer.start_paragraph("Value", false)
        });
        assert!(rtf.contains("Name\\tab Value\n\\par}"));
    }

    #[test]
    fn test_sequence_errors() {
        let mut output = Vec::new();
        let mut writer = RtfWriter::new(&mut output);

        assert!(matches!(writer.start_paragraph("x", true), Err(RtfError::NotOpen)));
        assert!(matches!(writer.start_table_row(), Err(RtfError::NotOpen)));
        assert!(matches!(writer.finish(), Err(RtfError::NotOpen)));

        writer.open(None, None).unwrap();
        assert!(matches!(writer.open(None, None), Err(RtfError::OutOfSequence { .. })));
        assert!(matches!(writer.start_table_cell(1000), Err(RtfError::OutOfSequence { .. })));
        assert!(matches!(writer.end_table_row(), Err(RtfError::OutOfSequence { .. })));

        writer.start_table_row().unwrap();
        assert!(matches!(writer.start_table_row(), Err(RtfError::OutOfSequence { .. })));
        assert!(matches!(writer.start_section(), Err(RtfError::OutOfSequence { .. })));
        assert!(matches!(writer.end_table_cell(), Err(RtfError::OutOfSequence { .. })));

        writer.start_table_cell(1000).unwrap();
        assert!(matches!(writer.end_table_row(), Err(RtfError::OutOfSequence { .. })));
        writer.end_table_cell().unwrap();
        writer.end_table_row().unwrap();

        writer.finish().unwrap();
        assert!(matches!(writer.finish(), Err(RtfError::OutOfSequence { .. })));
        assert_eq!(writer.state(), WriterState::Finished);
    }

    #[test]
    fn test_drop_closes_exactly_once() {
        let rtf = render(|writer| {
            writer.open(None, None)?;
            writer.finish()
        });
        assert_eq!(rtf.matches("\\par}").count(), 1);

        let rtf = render(|_| Ok(()));
        assert!(rtf.is_empty());
    }

    #[test]
    fn test_file_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rtf");
        {
            let mut writer = RtfWriter::create(&path).unwrap();
            writer.open(None, None).unwrap();
            writer.start_paragraph("On disk", true).unwrap();
        }
        let rtf = std::fs::read_to_string(&path).unwrap();
        assert!(rtf.starts_with("{\\rtf1"));
        assert!(rtf.ends_with("On disk\n\\par}"));
    }

    #[test]
    fn test_create_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.rtf");
        let err = RtfWriter::create(&path).err().unwrap();
        assert!(matches!(err, RtfError::Open(_)));
        assert_eq!(err.code(), 0x0001);
    }

    #[test]
    fn test_apply_preset() {
        let preset = FormatPreset::from_yaml("paragraph:\n  alignment: Justify\n").unwrap();
        let rtf = render(|writer| {
            writer.apply_preset(preset);
            writer.open(None, None)?;
            writer.start_paragraph("p", false)
        });
        assert!(rtf.contains("\\plain\\qj"));
    }
}
