// src/config.rs
use crate::api::DEFAULT_API_URL;
use crate::constants::{
    API_TOKEN_ENV, API_URL_ENV, DEFAULT_CACHE_TTL_SECS, EXPOSE_SOURCE_PREFIX,
    TEMPLATE_SOURCE_PREFIX,
};
use crate::error::AppError;
use crate::export::ExportFormat;
use crate::types::{ApiToken, ExposeId, PropertyId, TemplateId, ThemeKey, ValidatedUrl, ValidationError};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Template or exposé JSON file, or `template:<id>` / `expose:<id>` from the store
    pub source: String,

    /// Bind a property: JSON file path or store property id
    #[arg(long)]
    pub property: Option<String>,

    /// Override the document theme (default, modern, elegant, minimal, luxury)
    #[arg(long)]
    pub theme: Option<String>,

    /// Output kind
    #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
    pub format: ExportFormat,

    /// Custom Handlebars shell for HTML export
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Prefix for bare image storage keys
    #[arg(long)]
    pub media_base_url: Option<String>,

    /// Write the result to this file
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Pipe mode - write the result to stdout
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable response caching (always fetch fresh data)
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Cache TTL in seconds
    #[arg(long, default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Date used for {{date.*}} variables and the footer (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    RemoteTemplate(TemplateId),
    RemoteExpose(ExposeId),
}

impl DocumentSource {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::InvalidSource {
                input: input.to_string(),
                reason: "source must not be empty".to_string(),
            });
        }
        if let Some(id) = input.strip_prefix(TEMPLATE_SOURCE_PREFIX) {
            return Ok(Self::RemoteTemplate(TemplateId::parse(id)?));
        }
        if let Some(id) = input.strip_prefix(EXPOSE_SOURCE_PREFIX) {
            return Ok(Self::RemoteExpose(ExposeId::parse(id)?));
        }
        Ok(Self::File(PathBuf::from(input)))
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::File(_))
    }
}

/// Where the bound property comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySource {
    File(PathBuf),
    Remote(PropertyId),
}

impl PropertySource {
    /// Paths are recognized by a `.json` suffix or a path separator;
    /// everything else is a store id.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.ends_with(".json") || input.contains('/') || input.contains('\\') {
            Ok(Self::File(PathBuf::from(input)))
        } else {
            Ok(Self::Remote(PropertyId::parse(input)?))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Resolved pipeline configuration, validated and ready to drive all three stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: DocumentSource,
    pub property: Option<PropertySource>,
    pub theme: Option<ThemeKey>,
    pub format: ExportFormat,
    pub template_path: Option<PathBuf>,
    pub media_base_url: Option<ValidatedUrl>,
    pub output_file: Option<PathBuf>,
    pub pipe: bool,
    pub verbose: bool,
    pub no_cache: bool,
    pub cache_ttl: u64,
    /// Present whenever a remote source is configured
    pub api_token: Option<ApiToken>,
    pub api_url: ValidatedUrl,
    pub today: NaiveDate,
}

impl PipelineConfig {
    /// Resolve from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(API_TOKEN_ENV).ok();
        let url = std::env::var(API_URL_ENV).ok();
        Self::resolve_with(cli, token, url)
    }

    /// Resolve with explicit environment values.
    pub fn resolve_with(
        cli: CommandLineInput,
        api_token: Option<String>,
        api_url: Option<String>,
    ) -> Result<Self, AppError> {
        let source = DocumentSource::parse(&cli.source)?;
        let property = cli
            .property
            .as_deref()
            .map(PropertySource::parse)
            .transpose()?;

        let needs_store = source.is_remote() || property.as_ref().is_some_and(PropertySource::is_remote);
        let api_token = match (api_token.filter(|t| !t.trim().is_empty()), needs_store) {
            (Some(token), _) => Some(ApiToken::new(token)?),
            (None, true) => {
                return Err(AppError::MissingConfiguration(format!(
                    "{} environment variable not set (required for store sources)",
                    API_TOKEN_ENV
                )))
            }
            (None, false) => None,
        };

        let api_url = ValidatedUrl::parse(
            api_url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(DEFAULT_API_URL),
        )?;

        let media_base_url = cli
            .media_base_url
            .as_deref()
            .map(ValidatedUrl::parse)
            .transpose()?;

        Ok(PipelineConfig {
            source,
            property,
            theme: cli.theme.as_deref().map(ThemeKey::resolve),
            format: cli.format,
            template_path: cli.template,
            media_base_url,
            output_file: cli.output_file.map(PathBuf::from),
            pipe: cli.pipe,
            verbose: cli.verbose,
            no_cache: cli.no_cache,
            cache_ttl: cli.cache_ttl,
            api_token,
            api_url,
            today: cli.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: DocumentSource::File(PathBuf::from("template.json")),
            property: None,
            theme: None,
            format: ExportFormat::Html,
            template_path: None,
            media_base_url: None,
            output_file: None,
            pipe: false,
            verbose: false,
            no_cache: false,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            api_token: None,
            api_url: ValidatedUrl::parse(DEFAULT_API_URL).expect("Default API URL should be valid"),
            today: chrono::Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["expose-layout"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    #[test]
    fn test_document_sources() {
        assert_eq!(
            DocumentSource::parse("template:tpl_1").unwrap(),
            DocumentSource::RemoteTemplate(TemplateId::parse("tpl_1").unwrap())
        );
        assert!(DocumentSource::parse("expose:e-1").unwrap().is_remote());
        assert_eq!(
            DocumentSource::parse("./vorlage.json").unwrap(),
            DocumentSource::File(PathBuf::from("./vorlage.json"))
        );
        assert!(DocumentSource::parse("template:").is_err());
        assert!(DocumentSource::parse("  ").is_err());
    }

    #[test]
    fn test_property_sources() {
        assert!(matches!(PropertySource::parse("p1.json").unwrap(), PropertySource::File(_)));
        assert!(PropertySource::parse("prop_42").unwrap().is_remote());
    }

    #[test]
    fn test_local_source_needs_no_token() {
        let config = PipelineConfig::resolve_with(cli(&["t.json", "--format", "summary"]), None, None).unwrap();
        assert!(config.api_token.is_none());
        assert_eq!(config.format, ExportFormat::Summary);
        assert_eq!(config.api_url.as_str(), "https://api.neuroconcepts.ai/dev");
        assert_eq!(config.cache_ttl, 300);
    }

    #[test]
    fn test_remote_source_requires_token() {
        let err = PipelineConfig::resolve_with(cli(&["template:t1"]), None, None).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));

        let config = PipelineConfig::resolve_with(
            cli(&["template:t1", "--theme", "elegant", "--date", "2024-06-01"]),
            Some("tok_0123456789abcdef".to_string()),
            Some("http://localhost:3001".to_string()),
        )
        .unwrap();
        assert_eq!(config.theme, Some(ThemeKey::Elegant));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(config.api_token.is_some());
    }

    #[test]
    fn test_invalid_media_base_url() {
        assert!(PipelineConfig::resolve_with(
            cli(&["t.json", "--media-base-url", "ftp://files"]),
            None,
            None
        )
        .is_err());
    }
}
