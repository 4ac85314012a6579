// src/layout/geometry.rs
//! Page geometry shared by the paginator and the renderer.

/// A4 page width in CSS pixels
pub const PAGE_WIDTH: u32 = 595;

/// A4 page height in CSS pixels
pub const PAGE_HEIGHT: u32 = 842;

/// Padding on every side of a page
pub const PAGE_PADDING: u32 = 40;

/// Vertical space available to blocks on one page
pub const PAGE_CONTENT_HEIGHT: u32 = PAGE_HEIGHT - 2 * PAGE_PADDING;

/// Horizontal space available to blocks on one page
pub const PAGE_CONTENT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_PADDING;
