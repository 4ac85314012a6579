// src/api/client.rs
//! Thin reqwest wrapper for the exposé store API: authentication and raw
//! request/response, no parsing.

use super::parser;
use super::responses::{ExposeUpdate, TemplateUpdate};
use crate::error::AppError;
use crate::model::{Expose, Property, Template};
use crate::types::{ApiToken, ExposeId, PropertyId, TemplateId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// Default store base URL, including the API gateway stage
pub const DEFAULT_API_URL: &str = "https://api.neuroconcepts.ai/dev";

#[derive(Clone)]
pub struct ExposeHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl ExposeHttpClient {
    pub fn new(token: &ApiToken, base_url: ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();
        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }

    pub fn base_url(&self) -> &ValidatedUrl {
        &self.base_url
    }

    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.base_url.join_endpoint(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    pub async fn put<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.base_url.join_endpoint(endpoint);
        log::debug!("PUT {}", url);
        Ok(self.client.put(url).json(body).send().await?)
    }

    async fn get_text(&self, endpoint: &str) -> Result<ApiResponse<String>, AppError> {
        extract_response_text(self.get(endpoint).await?).await
    }
}

pub(crate) fn template_endpoint(id: &TemplateId) -> String {
    format!("expose-templates/{}", id)
}

pub(crate) fn expose_endpoint(id: &ExposeId) -> String {
    format!("exposes/{}", id)
}

pub(crate) fn property_endpoint(id: &PropertyId) -> String {
    format!("properties/{}", id)
}

pub(crate) const TEMPLATES_ENDPOINT: &str = "expose-templates";

#[async_trait::async_trait]
impl super::ExposeRepository for ExposeHttpClient {
    async fn list_templates(&self) -> Result<Vec<Template>, AppError> {
        parser::parse_templates_response(self.get_text(TEMPLATES_ENDPOINT).await?)
    }

    async fn retrieve_template(&self, id: &TemplateId) -> Result<Template, AppError> {
        parser::parse_template_response(self.get_text(&template_endpoint(id)).await?)
    }

    async fn retrieve_expose(&self, id: &ExposeId) -> Result<Expose, AppError> {
        parser::parse_expose_response(self.get_text(&expose_endpoint(id)).await?)
    }

    async fn retrieve_property(&self, id: &PropertyId) -> Result<Property, AppError> {
        parser::parse_property_response(self.get_text(&property_endpoint(id)).await?)
    }

    async fn update_template(&self, template: &Template) -> Result<Template, AppError> {
        let body = TemplateUpdate::from(template);
        let response = self.put(&template_endpoint(&template.id), &body).await?;
        parser::parse_template_response(extract_response_text(response).await?)
    }

    async fn update_expose(&self, expose: &Expose) -> Result<Expose, AppError> {
        let body = ExposeUpdate::from(expose);
        let response = self.put(&expose_endpoint(&expose.id), &body).await?;
        parser::parse_expose_response(extract_response_text(response).await?)
    }
}

/// Response body with the metadata the parser needs.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;
    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_keep_stage_prefix() {
        let base = ValidatedUrl::parse(DEFAULT_API_URL).unwrap();
        let id = TemplateId::parse("tpl_1").unwrap();
        assert_eq!(
            base.join_endpoint(&template_endpoint(&id)),
            "https://api.neuroconcepts.ai/dev/expose-templates/tpl_1"
        );
        let id = PropertyId::parse("p-9").unwrap();
        assert_eq!(property_endpoint(&id), "properties/p-9");
    }
}
