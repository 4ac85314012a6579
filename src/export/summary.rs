// src/export/summary.rs
//! Layout reports: a human-readable summary and a JSON form.

use crate::layout::{estimated_height, Page, PageOpening};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub title: String,
    pub theme: String,
    pub capacity: u32,
    pub pages: Vec<PageReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub number: usize,
    pub opened_by: PageOpening,
    pub estimated_height: u32,
    pub overflowing: bool,
    pub blocks: Vec<BlockReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub height: u32,
}

impl LayoutReport {
    pub fn new(title: &str, theme: &str, pages: &[Page<'_>], capacity: u32) -> Self {
        let pages = pages
            .iter()
            .enumerate()
            .map(|(i, page)| PageReport {
                number: i + 1,
                opened_by: page.opened_by,
                estimated_height: page.estimated_height,
                overflowing: page.is_overflowing(capacity),
                blocks: page
                    .blocks
                    .iter()
                    .map(|block| BlockReport {
                        id: block.id().to_string(),
                        block_type: block.block_type().to_string(),
                        height: estimated_height(block),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: title.to_string(),
            theme: theme.to_string(),
            capacity,
            pages,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} (theme: {})", self.title, self.theme);
        let _ = writeln!(
            out,
            "{} page{}, capacity {}px",
            self.pages.len(),
            if self.pages.len() == 1 { "" } else { "s" },
            self.capacity
        );

        for page in &self.pages {
            let opened = match page.opened_by {
                PageOpening::Start => String::new(),
                PageOpening::Break { index } => format!(", after break #{}", index),
                PageOpening::Overflow => ", overflow".to_string(),
            };
            let _ = writeln!(
                out,
                "\nPage {} [{}/{}px{}]{}",
                page.number,
                page.estimated_height,
                self.capacity,
                opened,
                if page.overflowing { " OVERFLOW" } else { "" }
            );
            if page.blocks.is_empty() {
                let _ = writeln!(out, "  (empty)");
            }
            for block in &page.blocks {
                let _ = writeln!(out, "  - {:<18} {:>4}px  {}", block.block_type, block.height, block.id);
            }
        }
        out
    }
}
