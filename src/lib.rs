// src/lib.rs
//! expose-layout: paginates and renders real-estate exposé block templates
//! into printable A4 pages.
//!
//! # Public API
//!
//! - **Domain model** (`Block`, `Template`, `Expose`, `Property`, `Binding`)
//! - **Variables** (`resolve`, the field catalog)
//! - **Rendering** (`render_block`, `RenderContext`, `VisualNode`)
//! - **Layout** (`paginate`, page-break helpers, `LayoutMemo`)
//! - **Export** (HTML shell, layout summary and JSON)
//! - **Store adapter** (`ExposeRepository` and its HTTP implementations)

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod variables;

// --- Error Handling ---
pub use crate::error::{ApiErrorCode, AppError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, DocumentSource, PipelineConfig, PropertySource};

// --- Domain Model ---
pub use crate::model::{
    decode_blocks, encode_blocks, Agent, Binding, Block, BlockCategory, BlockCommon, BlockKind,
    Company, Expose, ExposeDocument, ExposeStatus, Lead, Property, StyleOverrides, Template,
};

// --- Domain Types ---
pub use crate::types::{
    ApiToken, BlockId, ExposeId, LeadId, Palette, PropertyId, RenderedExpose, TemplateId,
    ThemeKey, Typography, ValidatedUrl,
};

// --- Variables ---
pub use crate::variables::{resolve, FieldKey, FieldSpec, FIELDS};

// --- Rendering ---
pub use crate::render::{render_block, render_blocks, RenderContext, VisualNode};

// --- Layout ---
pub use crate::layout::{
    insert_page_break, page_break_before, paginate, remove_page_break_before, LayoutMemo, Page,
    PageOpening, PAGE_CONTENT_HEIGHT,
};

// --- Export ---
pub use crate::export::{export_html, ExportFormat, ExportShell, LayoutReport};

// --- Store Adapter ---
pub use crate::api::{CachedExposeClient, ExposeHttpClient, ExposeRepository};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    compose_layout, ComposeOptions, ContentSource, LayoutComposer, LayoutDelivery, LayoutPipeline,
    LoadedDocument,
};
