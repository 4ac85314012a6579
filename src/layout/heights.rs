// src/layout/heights.rs
//! Estimated block heights.
//!
//! These numbers are a contract with the PDF renderer: both sides must break
//! pages at the same places, so changing one value here means changing it
//! there too.

use crate::model::{Block, BlockKind};

/// Nominal height for block types this crate does not know.
pub const UNKNOWN_BLOCK_HEIGHT: u32 = 150;

/// Estimated rendered height of a block kind, in CSS pixels.
pub fn kind_height(kind: BlockKind) -> u32 {
    match kind {
        BlockKind::Hero => 256,
        BlockKind::Stats => 80,
        BlockKind::Text => 110,
        BlockKind::Gallery => 190,
        BlockKind::Features => 140,
        BlockKind::Highlights => 140,
        BlockKind::Location => 100,
        BlockKind::Contact => 120,
        BlockKind::PriceTable => 140,
        BlockKind::EnergyCertificate => 110,
        BlockKind::Cta => 110,
        BlockKind::Quote => 80,
        BlockKind::Floorplan => 240,
        BlockKind::TwoColumn => 140,
        BlockKind::Video => 90,
        BlockKind::VirtualTour => 90,
        BlockKind::LeadInfo => 120,
        BlockKind::PageBreak => 0,
        BlockKind::Unknown => UNKNOWN_BLOCK_HEIGHT,
    }
}

pub fn estimated_height(block: &Block) -> u32 {
    kind_height(block.kind())
}
