// src/layout/mod.rs
//! Page layout: geometry, block height estimates and greedy pagination.

mod geometry;
mod heights;
mod memo;
mod paginator;

pub use geometry::{PAGE_CONTENT_HEIGHT, PAGE_CONTENT_WIDTH, PAGE_HEIGHT, PAGE_PADDING, PAGE_WIDTH};
pub use heights::{estimated_height, kind_height, UNKNOWN_BLOCK_HEIGHT};
pub use memo::{LayoutMemo, DEFAULT_MEMO_CAPACITY};
pub use paginator::{
    insert_page_break, page_break_before, paginate, remove_page_break_before, Page, PageOpening,
};
