mod block;
pub mod blocks;
pub mod common;
pub mod decode;
mod document;
mod entity;

pub use block::{Block, BlockCategory, BlockKind};
pub use blocks::*;
pub use common::*;
pub use decode::{decode_blocks, encode_blocks};
pub use document::{Expose, ExposeDocument, ExposeStatus, Template};
pub use entity::{sample_agent, sample_company, sample_lead, Agent, Binding, Company, Lead, Property};
