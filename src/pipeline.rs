// src/pipeline.rs
//! Pipeline stages: load a document, lay it out, deliver the result.
//!
//! Each stage is a capability trait so it can be exercised in isolation.
//! [`LayoutPipeline`] is the production implementation driven by the CLI.

use crate::api::{CachedExposeClient, ExposeHttpClient, ExposeRepository};
use crate::config::{DocumentSource, PipelineConfig, PropertySource};
use crate::error::AppError;
use crate::export::{export_html, ExportFormat, ExportShell, LayoutReport};
use crate::layout::{LayoutMemo, PAGE_CONTENT_HEIGHT};
use crate::model::{Binding, ExposeDocument, Property};
use crate::output::{default_output_filename, deliver, DeliveryTarget, OutputPlan, OutputReport};
use crate::render::RenderContext;
use crate::types::{RenderedExpose, ThemeKey};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A document plus the property it should be shown with, if any.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ExposeDocument,
    pub binding: Option<Binding>,
}

impl LoadedDocument {
    /// Bind an explicitly loaded property, else the property embedded in an
    /// exposé. Templates without a property stay unbound and show chips.
    pub fn new(document: ExposeDocument, property: Option<Property>, today: NaiveDate) -> Self {
        let binding = property
            .or_else(|| document.embedded_property().cloned())
            .map(|property| Binding::preview(property, today));
        Self { document, binding }
    }
}

/// Loads the document to lay out.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self) -> Result<LoadedDocument, AppError>;
}

/// Lays a loaded document out into its final textual form.
pub trait LayoutComposer {
    fn compose(&self, content: &LoadedDocument) -> Result<RenderedExpose, AppError>;
}

/// Delivers a rendered document to its destinations.
pub trait LayoutDelivery {
    fn deliver(
        &self,
        rendered: RenderedExpose,
        content: &LoadedDocument,
    ) -> Result<OutputReport, AppError>;
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Everything besides the document that shapes the output.
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions<'a> {
    pub format: ExportFormat,
    pub theme: Option<ThemeKey>,
    pub shell_path: Option<&'a Path>,
    pub media_base_url: Option<&'a str>,
    pub today: NaiveDate,
}

/// Paginate and export `content` in the requested format.
pub fn compose_layout(
    content: &LoadedDocument,
    options: &ComposeOptions<'_>,
    memo: &LayoutMemo,
) -> Result<RenderedExpose, AppError> {
    let document = &content.document;
    let theme = options.theme.unwrap_or_else(|| document.theme_key());
    let title = document.display_title();
    let pages = memo.paginate(document.blocks(), theme, PAGE_CONTENT_HEIGHT);

    log::info!(
        "Composing '{}' as {}: {} blocks on {} pages",
        title,
        options.format,
        document.blocks().len(),
        pages.len()
    );

    let output = match options.format {
        ExportFormat::Html => {
            let shell = ExportShell::load(options.shell_path)?;
            let ctx = RenderContext::new(theme)
                .with_binding(content.binding.as_ref())
                .with_media_base_url(options.media_base_url);
            export_html(&shell, &title, &pages, &ctx, options.today)?
        }
        ExportFormat::Summary => {
            LayoutReport::new(&title, theme.as_str(), &pages, PAGE_CONTENT_HEIGHT).to_summary()
        }
        ExportFormat::Json => {
            LayoutReport::new(&title, theme.as_str(), &pages, PAGE_CONTENT_HEIGHT).to_json()?
        }
    };
    Ok(RenderedExpose::new(output))
}

/// Plan delivery: stdout in pipe mode, else the output file, else a file
/// named after the document in the working directory.
pub fn plan_delivery(
    rendered: RenderedExpose,
    title: &str,
    document_id: &str,
    config: &PipelineConfig,
) -> OutputPlan {
    let content = rendered.into_string();
    let target = if config.pipe {
        DeliveryTarget::PrintToStdout { content }
    } else {
        let path = config.output_file.clone().unwrap_or_else(|| {
            PathBuf::from(default_output_filename(
                title,
                document_id,
                config.format.extension(),
            ))
        });
        DeliveryTarget::WriteFile { path, content }
    };
    OutputPlan::new().with_operation(target)
}

// ---------------------------------------------------------------------------
// Production pipeline
// ---------------------------------------------------------------------------

pub struct LayoutPipeline<'a> {
    config: &'a PipelineConfig,
    memo: LayoutMemo,
}

impl<'a> LayoutPipeline<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self {
            config,
            memo: LayoutMemo::default(),
        }
    }

    async fn repository(&self) -> Result<Arc<dyn ExposeRepository>, AppError> {
        let token = self.config.api_token.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration("API token required for store sources".to_string())
        })?;
        let http_client = ExposeHttpClient::new(token, self.config.api_url.clone())?;
        if self.config.no_cache {
            log::info!("Cache disabled, all requests go to {}", self.config.api_url);
            Ok(Arc::new(http_client))
        } else {
            log::info!("Cache enabled (TTL: {}s)", self.config.cache_ttl);
            Ok(Arc::new(
                CachedExposeClient::new(http_client, self.config.cache_ttl).await?,
            ))
        }
    }

    async fn load_property(
        &self,
        source: &PropertySource,
        repository: Option<&Arc<dyn ExposeRepository>>,
    ) -> Result<Property, AppError> {
        match source {
            PropertySource::File(path) => read_json(path).await,
            PropertySource::Remote(id) => match repository {
                Some(repo) => repo.retrieve_property(id).await,
                None => self.repository().await?.retrieve_property(id).await,
            },
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&text).map_err(|source| AppError::JsonParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a template or exposé JSON file.
pub async fn read_document(path: &Path) -> Result<ExposeDocument, AppError> {
    let value: serde_json::Value = read_json(path).await?;
    ExposeDocument::from_json(value).map_err(|source| AppError::JsonParseError {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait::async_trait]
impl ContentSource for LayoutPipeline<'_> {
    async fn fetch(&self) -> Result<LoadedDocument, AppError> {
        let mut repository = None;
        let document = match &self.config.source {
            DocumentSource::File(path) => {
                log::info!("Reading document from {}", path.display());
                read_document(path).await?
            }
            DocumentSource::RemoteTemplate(id) => {
                log::info!("Retrieving template {}", id);
                let repo = self.repository().await?;
                let template = repo.retrieve_template(id).await?;
                repository = Some(repo);
                ExposeDocument::Template(template)
            }
            DocumentSource::RemoteExpose(id) => {
                log::info!("Retrieving exposé {}", id);
                let repo = self.repository().await?;
                let expose = repo.retrieve_expose(id).await?;
                repository = Some(repo);
                ExposeDocument::Expose(expose)
            }
        };

        let property = match &self.config.property {
            Some(source) => Some(self.load_property(source, repository.as_ref()).await?),
            None => None,
        };

        log::info!(
            "Loaded {} '{}' with {} blocks",
            if document.is_template() { "template" } else { "exposé" },
            document.display_title(),
            document.blocks().len()
        );
        Ok(LoadedDocument::new(document, property, self.config.today))
    }
}

impl LayoutComposer for LayoutPipeline<'_> {
    fn compose(&self, content: &LoadedDocument) -> Result<RenderedExpose, AppError> {
        let media_base_url = self.config.media_base_url.as_ref().map(|u| u.as_str());
        let options = ComposeOptions {
            format: self.config.format,
            theme: self.config.theme,
            shell_path: self.config.template_path.as_deref(),
            media_base_url,
            today: self.config.today,
        };
        compose_layout(content, &options, &self.memo)
    }
}

impl LayoutDelivery for LayoutPipeline<'_> {
    fn deliver(
        &self,
        rendered: RenderedExpose,
        content: &LoadedDocument,
    ) -> Result<OutputReport, AppError> {
        let plan = plan_delivery(
            rendered,
            &content.document.display_title(),
            content.document.id(),
            self.config,
        );
        let report = deliver(plan)?;
        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> ExposeDocument {
        ExposeDocument::from_json(json!({
            "id": "t1",
            "name": "Standard",
            "theme": "modern",
            "blocks": [
                { "id": "b1", "type": "hero", "title": "{{property.title}}" },
                { "id": "b2", "type": "pageBreak" },
                { "id": "b3", "type": "stats" }
            ]
        }))
        .unwrap()
    }

    fn options(format: ExportFormat) -> ComposeOptions<'static> {
        ComposeOptions {
            format,
            theme: None,
            shell_path: None,
            media_base_url: None,
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_unbound_template_shows_chips() {
        let content = LoadedDocument::new(template(), None, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(content.binding.is_none());
        let html = compose_layout(&content, &options(ExportFormat::Html), &LayoutMemo::default()).unwrap();
        assert!(html.as_str().contains("data-variable=\"{{property.title}}\""));
        assert!(html.as_str().contains("--primary: #0F172A"));
    }

    #[test]
    fn test_bound_template_resolves() {
        let mut property: Property = serde_json::from_value(json!({ "id": "p1", "title": "Seeblick" })).unwrap();
        property.rooms = Some(3.0);
        let content = LoadedDocument::new(template(), Some(property), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let html = compose_layout(&content, &options(ExportFormat::Html), &LayoutMemo::default()).unwrap();
        assert!(html.as_str().contains("Seeblick"));
        assert!(!html.as_str().contains("variable-chip\" data-variable"));
    }

    #[test]
    fn test_json_format() {
        let content = LoadedDocument::new(template(), None, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut opts = options(ExportFormat::Json);
        opts.theme = Some(ThemeKey::Minimal);
        let out = compose_layout(&content, &opts, &LayoutMemo::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.as_str()).unwrap();
        assert_eq!(value["theme"], "minimal");
        assert_eq!(value["pages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_plan_delivery_targets() {
        let mut config = PipelineConfig::default();
        let plan = plan_delivery(RenderedExpose::new("x"), "Vorlage t1", "t1", &config);
        assert_eq!(
            plan.operations,
            vec![DeliveryTarget::WriteFile {
                path: PathBuf::from("Vorlage t1_t1.html"),
                content: "x".to_string()
            }]
        );

        config.pipe = true;
        let plan = plan_delivery(RenderedExpose::new("x"), "Vorlage t1", "t1", &config);
        assert_eq!(plan.operations, vec![DeliveryTarget::PrintToStdout { content: "x".to_string() }]);
    }

    #[tokio::test]
    async fn test_read_document_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_document(&path).await.unwrap_err();
        assert!(matches!(err, AppError::JsonParseError { .. }));
    }
}
