// src/export/mod.rs
//! Export formats for a paginated exposé.

mod html;
mod summary;

pub use html::{export_html, footer_text, ExportShell};
pub use summary::{BlockReport, LayoutReport, PageReport};

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Printable HTML document
    #[default]
    Html,
    /// Plain-text page overview
    Summary,
    /// Page and block layout as JSON
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Summary => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Summary => write!(f, "summary"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}
