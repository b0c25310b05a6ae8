//! rtf-writer - A Rust library for generating Rich Text Format documents
//!
//! This library writes RTF 1.x documents to any [`std::io::Write`] sink. It
//! keeps a "pen state" of formatting records (document, section, paragraph
//! with character attributes, table row, table cell) and renders the current
//! state as RTF control words each time a structural element is started.
//!
//! # Features
//!
//! - **Font and color tables**: Built-in defaults or caller-supplied lists
//! - **Paragraphs**: Alignment, indents, spacing, tab stops, bullets, borders
//!   and shading, plus the full set of character attributes
//! - **Sections**: Page geometry, columns, page numbers and section breaks
//! - **Tables**: Row alignment and padding, cell borders, shading, vertical
//!   alignment and text direction
//! - **Unicode text**: Non-ASCII characters become `\u` escapes with a
//!   fallback byte from the document's ANSI code page, so the output is
//!   always plain ASCII
//! - **Presets**: All five format records can be loaded from YAML
//!
//! # Example - Writing a document
//!
//! ```no_run
//! use rtf_writer::{Alignment, BorderType, RtfWriter, TableBorder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = RtfWriter::create("report.rtf")?;
//! writer.open(Some("Arial;Courier New"), None)?;
//!
//! // Centered bold title
//! let title = writer.paragraph_format_mut();
//! title.alignment = Alignment::Center;
//! title.character.bold = true;
//! title.character.font_size = 32;
//! writer.start_paragraph("Quarterly report", false)?;
//!
//! // Two-cell table with single borders
//! writer.set_paragraph_format(Default::default());
//! writer
//!     .table_cell_format_mut()
//!     .set_all_borders(TableBorder::new(BorderType::Single, 10));
//! writer.start_table_row()?;
//! for (boundary, text) in [(3000, "Revenue"), (6000, "1.2M")] {
//!     writer.start_table_cell(boundary)?;
//!     writer.paragraph_format_mut().table_text = true;
//!     writer.start_paragraph(text, false)?;
//!     writer.end_table_cell()?;
//! }
//! writer.end_table_row()?;
//!
//! writer.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Loading a preset
//!
//! ```
//! use rtf_writer::{FormatPreset, RtfWriter};
//!
//! let preset = FormatPreset::from_yaml("paragraph:\n  character:\n    italic: true\n")?;
//! let mut output = Vec::new();
//! let mut writer = RtfWriter::new(&mut output);
//! writer.apply_preset(preset);
//! writer.open(None, None)?;
//! writer.start_paragraph("Slanted", true)?;
//! writer.finish()?;
//! drop(writer);
//! assert!(String::from_utf8_lossy(&output).contains("\\i\\outl0"));
//! # Ok::<(), rtf_writer::RtfError>(())
//! ```

mod border;
mod control;
mod encoding;
mod error;
mod options;
mod paragraph;
mod section;
mod store;
mod table;
mod types;
mod writer;

// Re-exports
pub use border::{
    BorderFormat, BorderKind, BorderType, ShadingFormat, ShadingPattern, TableBorder, border_name,
    shading_name,
};
pub use control::{bin_hex_convert, encode_text, encode_text_with};
pub use encoding::CodePage;
pub use error::{RTF_SUCCESS, RtfError, RtfResult};
pub use options::{FormatPreset, WriterOptions};
pub use paragraph::{
    Alignment, CharacterFormat, NumberingFormat, ParagraphBreak, ParagraphFormat, TabFormat,
    TabKind, TabLead, UnderlineStyle,
};
pub use section::{DocumentFormat, SectionBreak, SectionFormat, ViewKind};
pub use store::FormatStore;
pub use table::{
    CellTextDirection, CellVerticalAlignment, RowAlignment, TableCellFormat, TableRowFormat,
};
pub use types::{Color, ColorRef, ColorTable, Font, FontFamily, FontRef, FontTable};
pub use writer::{RtfWriter, WriterState};
