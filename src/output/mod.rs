// src/output/mod.rs
//! Output delivery, split into a pure planning step and an I/O step.

mod paths;
mod types;
mod writer;

pub use paths::{default_output_filename, sanitize_filename};
pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
