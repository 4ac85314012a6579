// src/layout/memo.rs
//! LRU memo of pagination results keyed on the block kind sequence and theme.
//!
//! Block heights depend only on the block kind, so the kind sequence is all
//! the packing pass ever sees.

use super::paginator::{plan, Page, PagePlan};
use crate::model::Block;
use crate::types::ThemeKey;
use lru::LruCache;
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of layouts kept by [`LayoutMemo::default`]
pub const DEFAULT_MEMO_CAPACITY: usize = 32;

/// Caches page plans so re-rendering an unchanged block list skips the
/// packing pass.
pub struct LayoutMemo {
    cache: Mutex<LruCache<u64, MemoEntry>>,
}

#[derive(Clone)]
struct MemoEntry {
    block_count: usize,
    plans: Arc<Vec<PagePlan>>,
}

impl Default for LayoutMemo {
    fn default() -> Self {
        Self::new(DEFAULT_MEMO_CAPACITY)
    }
}

impl LayoutMemo {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn key(blocks: &[Block], theme: ThemeKey, capacity: u32) -> u64 {
        let mut hasher = DefaultHasher::new();
        blocks.len().hash(&mut hasher);
        for block in blocks {
            block.kind().hash(&mut hasher);
        }
        theme.hash(&mut hasher);
        capacity.hash(&mut hasher);
        hasher.finish()
    }

    /// Same result as [`super::paginate`], served from the memo when a block
    /// list of the same kinds was laid out before with this theme and capacity.
    ///
    /// A stored entry whose block count differs from `blocks` is replaced.
    pub fn paginate<'a>(&self, blocks: &'a [Block], theme: ThemeKey, capacity: u32) -> Vec<Page<'a>> {
        let key = Self::key(blocks, theme, capacity);
        let plans = self.lookup(key, blocks, capacity);
        plans.iter().map(|p| p.materialize(blocks)).collect()
    }

    fn lookup(&self, key: u64, blocks: &[Block], capacity: u32) -> Arc<Vec<PagePlan>> {
        let mut cache = self.cache.lock();
        match cache.get(&key) {
            Some(entry) if entry.block_count == blocks.len() => {
                log::debug!("Layout memo hit ({} blocks)", blocks.len());
                return Arc::clone(&entry.plans);
            }
            Some(entry) => log::debug!(
                "Layout memo entry for {} blocks does not fit {} blocks, recomputing",
                entry.block_count,
                blocks.len()
            ),
            None => {}
        }

        let plans = Arc::new(plan(blocks, capacity));
        cache.put(
            key,
            MemoEntry {
                block_count: blocks.len(),
                plans: Arc::clone(&plans),
            },
        );
        plans
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate;
    use serde_json::json;

    fn sample() -> Vec<Block> {
        ["hero", "text", "pageBreak", "gallery"]
            .iter()
            .enumerate()
            .map(|(i, t)| Block::from_json(&json!({ "id": format!("m{}", i), "type": t })))
            .collect()
    }

    #[test]
    fn test_memo_matches_direct_pagination() {
        let memo = LayoutMemo::new(4);
        let blocks = sample();
        let direct = paginate(&blocks, 762);
        assert_eq!(memo.paginate(&blocks, ThemeKey::Default, 762), direct);
        assert_eq!(memo.paginate(&blocks, ThemeKey::Default, 762), direct);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_memo_key_includes_theme_and_content() {
        let memo = LayoutMemo::new(4);
        let mut blocks = sample();
        memo.paginate(&blocks, ThemeKey::Default, 762);
        memo.paginate(&blocks, ThemeKey::Elegant, 762);
        blocks.pop();
        memo.paginate(&blocks, ThemeKey::Default, 762);
        assert_eq!(memo.len(), 3);

        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn test_memo_ignores_block_content() {
        let memo = LayoutMemo::new(4);
        let blocks = sample();
        memo.paginate(&blocks, ThemeKey::Default, 762);

        let mut edited = sample();
        edited[1] = Block::from_json(&json!({ "id": "m1", "type": "text", "content": "Neu" }));
        assert_eq!(memo.paginate(&edited, ThemeKey::Default, 762), paginate(&edited, 762));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_stale_entry_with_other_block_count_is_replaced() {
        let memo = LayoutMemo::new(4);
        let blocks = sample();
        let key = LayoutMemo::key(&blocks, ThemeKey::Default, 762);
        let longer: Vec<Block> = sample().into_iter().chain(sample()).collect();
        memo.cache.lock().put(
            key,
            MemoEntry {
                block_count: longer.len(),
                plans: Arc::new(plan(&longer, 762)),
            },
        );

        assert_eq!(memo.paginate(&blocks, ThemeKey::Default, 762), paginate(&blocks, 762));
        assert_eq!(memo.cache.lock().peek(&key).map(|e| e.block_count), Some(blocks.len()));
    }

    #[test]
    fn test_memo_evicts_least_recent() {
        let memo = LayoutMemo::new(1);
        let blocks = sample();
        memo.paginate(&blocks, ThemeKey::Default, 762);
        memo.paginate(&blocks, ThemeKey::Modern, 762);
        assert_eq!(memo.len(), 1);
    }
}
