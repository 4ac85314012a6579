//! `{{namespace.field}}` variables: catalog, live resolution and editorial segments.

pub mod catalog;
pub mod format;
mod resolver;
mod segments;

pub use catalog::{lookup, FieldKey, FieldSpec, Namespace, FIELDS};
pub use resolver::{field_value, resolve};
pub use segments::{has_tokens, segment, Segment, TokenSegment};
