//! Writer configuration and format presets.
//!
//! All configuration is passed in memory. [`FormatPreset`] bundles the five
//! format records so a set of styles can be kept as YAML and applied to a
//! writer in one call.

use crate::error::{RtfError, RtfResult};
use crate::paragraph::ParagraphFormat;
use crate::section::{DocumentFormat, SectionFormat};
use crate::table::{TableCellFormat, TableRowFormat};
use serde::{Deserialize, Serialize};

/// RTF writer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// ANSI code page number (default 1252 for Western European). Also used
    /// for every font's `\cpg` and for the `\'hh` fallback bytes.
    pub code_page: u16,
    /// Generator name written to `{\*\generator ...;}`
    pub generator: String,
    /// Author written to the info group
    pub author: Option<String>,
    /// Company written to the info group
    pub company: Option<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            code_page: 1252,
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string(),
            author: None,
            company: None,
        }
    }
}

/// A complete set of format records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatPreset {
    /// Document formatting
    pub document: DocumentFormat,
    /// Section formatting
    pub section: SectionFormat,
    /// Paragraph formatting
    pub paragraph: ParagraphFormat,
    /// Table row formatting
    pub table_row: TableRowFormat,
    /// Table cell formatting
    pub table_cell: TableCellFormat,
}

impl FormatPreset {
    /// Parse a preset from YAML. Missing records and fields take their
    /// default values.
    pub fn from_yaml(yaml: &str) -> RtfResult<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| RtfError::Config(format!("Failed to parse preset YAML: {}", e)))
    }

    /// Serialize the preset to YAML.
    pub fn to_yaml(&self) -> RtfResult<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| RtfError::Config(format!("Failed to serialize preset to YAML: {}", e)))
    }
}
