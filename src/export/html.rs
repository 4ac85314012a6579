// src/export/html.rs
//! Full-document HTML export through a Handlebars shell template.

use crate::error::AppError;
use crate::layout::{Page, PAGE_CONTENT_HEIGHT, PAGE_HEIGHT, PAGE_PADDING, PAGE_WIDTH};
use crate::render::{render_blocks, RenderContext};
use crate::variables::format::short_date;
use chrono::NaiveDate;
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

const SHELL_NAME: &str = "expose";
const BUILTIN_SHELL: &str = include_str!("templates/expose.hbs");

/// Registered Handlebars shell the pages are poured into.
pub struct ExportShell {
    registry: Handlebars<'static>,
    name: String,
}

impl ExportShell {
    /// The shell shipped with the crate.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_source("builtin", BUILTIN_SHELL)
    }

    /// A user-supplied `.hbs` shell.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!("Loaded export shell from {}", path.display());
        Self::from_source(&path.display().to_string(), &source)
    }

    /// Built-in shell unless a custom path is configured.
    pub fn load(custom: Option<&Path>) -> Result<Self, AppError> {
        match custom {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    fn from_source(name: &str, source: &str) -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(SHELL_NAME, source)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            registry,
            name: name.to_string(),
        })
    }

    fn render(&self, data: &serde_json::Value) -> Result<String, AppError> {
        self.registry
            .render(SHELL_NAME, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: self.name.clone(),
                message: e.to_string(),
            })
    }
}

/// Footer line printed on every exported page.
pub fn footer_text(generated_on: NaiveDate) -> String {
    format!("Exposé erstellt mit NeuroConcepts.ai • {}", short_date(generated_on))
}

/// Render paginated blocks into one HTML document.
///
/// Pages taller than the printable area are exported unclipped and carry
/// `data-overflow="true"`.
pub fn export_html(
    shell: &ExportShell,
    title: &str,
    pages: &[Page<'_>],
    ctx: &RenderContext<'_>,
    generated_on: NaiveDate,
) -> Result<String, AppError> {
    let palette = ctx.theme.palette();
    let typography = ctx.theme.typography();

    let page_data: Vec<_> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let html: String = render_blocks(page.blocks.iter().copied(), ctx)
                .iter()
                .map(|node| node.to_html())
                .collect();
            let overflowing = page.is_overflowing(PAGE_CONTENT_HEIGHT);
            if overflowing {
                log::warn!(
                    "Page {} overflows the printable area ({} > {} px)",
                    i + 1,
                    page.estimated_height,
                    PAGE_CONTENT_HEIGHT
                );
            }
            json!({ "number": i + 1, "html": html, "overflowing": overflowing })
        })
        .collect();

    let data = json!({
        "title": title,
        "theme": {
            "key": ctx.theme.as_str(),
            "primary": palette.primary,
            "secondary": palette.secondary,
            "accent": palette.accent,
            "background": palette.background,
            "font_family": typography.font_family,
        },
        "page": {
            "width": PAGE_WIDTH,
            "height": PAGE_HEIGHT,
            "padding": PAGE_PADDING,
        },
        "pages": page_data,
        "footer": footer_text(generated_on),
    });

    let html = shell.render(&data)?;
    log::info!("Exported {} pages as HTML ({} bytes)", pages.len(), html.len());
    Ok(html)
}
