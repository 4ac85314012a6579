// src/api/parser.rs
//! Turns raw store responses into domain types or typed errors.

use super::client::ApiResponse;
use super::responses::ErrorBody;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{ApiErrorCode, AppError};
use crate::model::{Expose, Property, Template};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Success bodies deserialize into `T`; anything else becomes
/// [`AppError::ExposeService`].
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_body(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    let code = ApiErrorCode::from_http_status(status.as_u16());
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {} from {}", status, url),
    };
    log::warn!("Store API error {} ({}): {}", status.as_u16(), code, message);
    AppError::ExposeService {
        code,
        message,
        status,
    }
}

pub fn parse_templates_response(result: ApiResponse<String>) -> Result<Vec<Template>, AppError> {
    parse_api_response(result)
}

pub fn parse_template_response(result: ApiResponse<String>) -> Result<Template, AppError> {
    parse_api_response(result)
}

pub fn parse_expose_response(result: ApiResponse<String>) -> Result<Expose, AppError> {
    parse_api_response(result)
}

pub fn parse_property_response(result: ApiResponse<String>) -> Result<Property, AppError> {
    parse_api_response(result)
}
