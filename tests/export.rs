use chrono::NaiveDate;
use expose_layout::{
    compose_layout, paginate, ComposeOptions, ExportFormat, ExportShell, ExposeDocument,
    LayoutMemo, LayoutReport, LoadedDocument, Property, RenderContext, ThemeKey,
    PAGE_CONTENT_HEIGHT,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const TEMPLATE: &str = include_str!("fixtures/template_standard.json");
const PROPERTY: &str = include_str!("fixtures/property_altbau.json");

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn template() -> ExposeDocument {
    ExposeDocument::from_json(serde_json::from_str(TEMPLATE).unwrap()).unwrap()
}

fn options(format: ExportFormat) -> ComposeOptions<'static> {
    ComposeOptions {
        format,
        theme: None,
        shell_path: None,
        media_base_url: None,
        today: today(),
    }
}

#[test]
fn test_summary_of_fixture_template() {
    let content = LoadedDocument::new(template(), None, today());
    let rendered = compose_layout(&content, &options(ExportFormat::Summary), &LayoutMemo::default()).unwrap();
    let summary = rendered.as_str();

    assert!(summary.starts_with("Standard Exposé (theme: modern)\n2 pages, capacity 762px\n"));
    assert!(summary.contains("Page 1 [586/762px]\n"));
    assert!(summary.contains("Page 2 [670/762px, after break #4]\n"));
    assert!(!summary.contains("OVERFLOW"));
    assert!(summary.contains("legacy-1"));
}

#[test]
fn test_json_report_lists_blocks_per_page() {
    let content = LoadedDocument::new(template(), None, today());
    let rendered = compose_layout(&content, &options(ExportFormat::Json), &LayoutMemo::default()).unwrap();
    let value: Value = serde_json::from_str(rendered.as_str()).unwrap();

    assert_eq!(value["capacity"], json!(762));
    assert_eq!(value["pages"].as_array().unwrap().len(), 2);
    assert_eq!(value["pages"][0]["openedBy"], json!({ "kind": "start" }));
    assert_eq!(value["pages"][1]["openedBy"], json!({ "kind": "break", "index": 4 }));
    assert_eq!(
        value["pages"][1]["blocks"][4],
        json!({ "id": "legacy-1", "type": "divider", "height": 150 })
    );
}

#[test]
fn test_html_export_of_unbound_template() {
    let content = LoadedDocument::new(template(), None, today());
    let rendered = compose_layout(&content, &options(ExportFormat::Html), &LayoutMemo::default()).unwrap();
    let html = rendered.as_str();

    assert_eq!(html.matches("<section class=\"page\"").count(), 2);
    assert!(html.contains("--primary: #0F172A"));
    assert!(html.contains("variable-chip"));
    assert!(html.contains("Exposé erstellt mit NeuroConcepts.ai • 1.6.2024"));
    assert!(html.contains("Block: divider"));
}

#[test]
fn test_html_export_with_bound_property() {
    let property: Property = serde_json::from_str(PROPERTY).unwrap();
    let content = LoadedDocument::new(template(), Some(property), today());
    let mut opts = options(ExportFormat::Html);
    opts.theme = Some(ThemeKey::Elegant);
    let rendered = compose_layout(&content, &opts, &LayoutMemo::default()).unwrap();
    let html = rendered.as_str();

    assert!(!html.contains("variable-chip"));
    assert!(html.contains("Altbauwohnung am Park"));
    assert!(html.contains("389.000 €"));
    assert!(html.contains("--primary: #78350F"));
    assert!(!html.contains("javascript:"));
}

#[test]
fn test_theme_override_applies_to_reports() {
    let content = LoadedDocument::new(template(), None, today());
    let mut opts = options(ExportFormat::Summary);
    opts.theme = Some(ThemeKey::Minimal);
    let rendered = compose_layout(&content, &opts, &LayoutMemo::default()).unwrap();
    assert!(rendered.as_str().starts_with("Standard Exposé (theme: minimal)"));
}

#[test]
fn test_report_and_html_agree_on_page_count() {
    let doc = template();
    let pages = paginate(doc.blocks(), PAGE_CONTENT_HEIGHT);
    let report = LayoutReport::new("x", "default", &pages, PAGE_CONTENT_HEIGHT);

    let shell = ExportShell::builtin().unwrap();
    let html = expose_layout::export_html(&shell, "x", &pages, &RenderContext::new(ThemeKey::Default), today()).unwrap();
    assert_eq!(report.pages.len(), html.matches("class=\"page-footer\"").count());
}

#[test]
fn test_missing_custom_shell_is_reported() {
    let content = LoadedDocument::new(template(), None, today());
    let path = std::path::PathBuf::from("/nonexistent/expose-shell.hbs");
    let opts = ComposeOptions {
        shell_path: Some(path.as_path()),
        ..options(ExportFormat::Html)
    };
    let err = compose_layout(&content, &opts, &LayoutMemo::default()).unwrap_err();
    assert!(matches!(err, expose_layout::AppError::TemplateNotFound { .. }));
}
