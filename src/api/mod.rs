// src/api/mod.rs
//! Exposé store access: templates, exposés and properties over HTTP.
//!
//! Session tokens and tenancy are the server's business; this side only
//! sends a bearer token and maps failures to typed errors.

pub mod cache;
pub mod client;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Expose, Property, Template};
use crate::types::{ExposeId, PropertyId, TemplateId};

/// The ability to load and save exposé documents.
///
/// Layout code depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait ExposeRepository: Send + Sync {
    async fn list_templates(&self) -> Result<Vec<Template>, AppError>;
    async fn retrieve_template(&self, id: &TemplateId) -> Result<Template, AppError>;
    async fn retrieve_expose(&self, id: &ExposeId) -> Result<Expose, AppError>;
    async fn retrieve_property(&self, id: &PropertyId) -> Result<Property, AppError>;
    async fn update_template(&self, template: &Template) -> Result<Template, AppError>;
    async fn update_expose(&self, expose: &Expose) -> Result<Expose, AppError>;
}

pub use cache::CachedExposeClient;
pub use client::{ExposeHttpClient, DEFAULT_API_URL};
pub use responses::{ErrorBody, ExposeUpdate, TemplateUpdate};
