// src/layout/paginator.rs
//! Greedy page packing of an ordered block list.
//!
//! One pass, no backtracking. A page break block always opens a new page and
//! is itself dropped. A block that does not fit moves to a fresh page, unless
//! the current page is still empty, in which case it stays (oversized blocks
//! get a page of their own rather than an endless loop).

use super::heights::estimated_height;
use crate::model::{Block, BlockKind};
use crate::types::BlockId;
use serde::Serialize;

/// What caused a page to begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageOpening {
    /// First page of the document
    Start,
    /// Explicit page break at this index of the input list
    Break { index: usize },
    /// The previous page ran out of room
    Overflow,
}

/// A page of blocks, borrowed from the input list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub blocks: Vec<&'a Block>,
    /// Sum of the estimated heights of `blocks`
    pub estimated_height: u32,
    pub opened_by: PageOpening,
}

impl<'a> Page<'a> {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Only a lone oversized block can push a page past its capacity.
    pub fn is_overflowing(&self, capacity: u32) -> bool {
        self.estimated_height > capacity
    }

    pub fn kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(|b| b.kind()).collect()
    }
}

/// Page layout in terms of input indices; cheap to cache and rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagePlan {
    pub indices: Vec<usize>,
    pub estimated_height: u32,
    pub opened_by: PageOpening,
}

impl PagePlan {
    fn new(opened_by: PageOpening) -> Self {
        Self {
            indices: Vec::new(),
            estimated_height: 0,
            opened_by,
        }
    }

    pub fn materialize<'a>(&self, blocks: &'a [Block]) -> Page<'a> {
        Page {
            blocks: self.indices.iter().filter_map(|&i| blocks.get(i)).collect(),
            estimated_height: self.estimated_height,
            opened_by: self.opened_by,
        }
    }
}

pub(crate) fn plan(blocks: &[Block], capacity: u32) -> Vec<PagePlan> {
    let mut pages = Vec::new();
    let mut current = PagePlan::new(PageOpening::Start);

    for (index, block) in blocks.iter().enumerate() {
        if block.is_page_break() {
            let finished = std::mem::replace(&mut current, PagePlan::new(PageOpening::Break { index }));
            pages.push(finished);
            continue;
        }

        let height = estimated_height(block);
        if current.estimated_height + height > capacity && !current.indices.is_empty() {
            let finished = std::mem::replace(&mut current, PagePlan::new(PageOpening::Overflow));
            pages.push(finished);
        }
        current.indices.push(index);
        current.estimated_height += height;
    }
    pages.push(current);
    pages
}

/// Split `blocks` into pages whose content fits `capacity` pixels.
///
/// Always returns at least one page; an empty input yields one empty page.
pub fn paginate(blocks: &[Block], capacity: u32) -> Vec<Page<'_>> {
    let pages: Vec<Page<'_>> = plan(blocks, capacity)
        .iter()
        .map(|p| p.materialize(blocks))
        .collect();

    let overflowing = pages.iter().filter(|p| p.is_overflowing(capacity)).count();
    log::debug!(
        "Paginated {} blocks into {} pages (capacity {}px, {} overflowing)",
        blocks.len(),
        pages.len(),
        capacity,
        overflowing
    );
    pages
}

// --- Page-break editing ---

/// Index of the page break that opened page `page_index`.
///
/// `None` for the first page, for pages that began because of overflow and
/// for indices past the last page.
pub fn page_break_before(blocks: &[Block], page_index: usize, capacity: u32) -> Option<usize> {
    match plan(blocks, capacity).get(page_index)?.opened_by {
        PageOpening::Break { index } => Some(index),
        PageOpening::Start | PageOpening::Overflow => None,
    }
}

/// Merge page `page_index` into its predecessor by deleting the page break
/// that opened it. Returns whether a break was removed.
pub fn remove_page_break_before(blocks: &mut Vec<Block>, page_index: usize, capacity: u32) -> bool {
    match page_break_before(blocks, page_index, capacity) {
        Some(index) => {
            let removed = blocks.remove(index);
            log::debug!("Removed page break {} before page {}", removed.id(), page_index);
            true
        }
        None => false,
    }
}

/// Insert a fresh page break at `at` (clamped to the end of the list).
pub fn insert_page_break(blocks: &mut Vec<Block>, at: usize) -> BlockId {
    let block = Block::new_default(BlockKind::PageBreak);
    let id = block.id().clone();
    let at = at.min(blocks.len());
    blocks.insert(at, block);
    id
}
