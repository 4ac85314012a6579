use thiserror::Error;

mod domain_types;
mod ids;
mod theme;

pub use domain_types::*;
pub use ids::*;
pub use theme::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API token: {reason}")]
    InvalidApiToken { reason: String },

    #[error("Invalid document source '{input}': {reason}")]
    InvalidSource { input: String, reason: String },
}
