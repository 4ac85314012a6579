// src/constants.rs
//! Operational constants, grouped by the part of the system they bound.

// ---------------------------------------------------------------------------
// Store API
// ---------------------------------------------------------------------------

/// Environment variable holding the bearer token for remote sources.
pub const API_TOKEN_ENV: &str = "EXPOSE_API_TOKEN";

/// Environment variable overriding the store base URL.
pub const API_URL_ENV: &str = "EXPOSE_API_URL";

/// Default lifetime of cached GET responses, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Document sources
// ---------------------------------------------------------------------------

/// Source prefix selecting a remote template, as in `template:<id>`.
pub const TEMPLATE_SOURCE_PREFIX: &str = "template:";

/// Source prefix selecting a remote exposé, as in `expose:<id>`.
pub const EXPOSE_SOURCE_PREFIX: &str = "expose:";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log file name inside the system temp directory.
pub const LOG_FILE_NAME: &str = "expose_layout.log";
