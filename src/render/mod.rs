// src/render/mod.rs
//! Block rendering: blocks in, escaped visual nodes out.

mod block_renderer;
mod media;
mod node;
mod presenter;
mod sanitize;

pub use block_renderer::{render_block, render_blocks, RenderContext};
pub use media::{classify_video, VideoSource};
pub use node::{Element, VariableChip, VisualNode};
pub use presenter::{presenter_for, ChipPresenter, LivePresenter, VariablePresenter};
pub use sanitize::{safe_css_color, safe_link_url, safe_media_url, sanitize_rich, SanitizedHtml};
