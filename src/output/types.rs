// src/output/types.rs
//! Output plans and their delivery reports.

use std::path::PathBuf;

/// Ordered list of delivery operations for one rendered document.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write to a file, creating parent directories
    WriteFile { path: PathBuf, content: String },
    /// Print to stdout (pipe mode)
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    pub fn describe(&self) -> String {
        match self {
            DeliveryTarget::WriteFile { path, .. } => format!("file {}", path.display()),
            DeliveryTarget::PrintToStdout { .. } => "stdout".to_string(),
        }
    }
}

/// Outcome of [`super::deliver`].
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub completed: Vec<CompletedOperation>,
    pub failed: Vec<FailedOperation>,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.failed.push(operation);
        self
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Paths of all files written successfully.
    pub fn written_files(&self) -> Vec<&PathBuf> {
        self.completed
            .iter()
            .filter_map(|op| match &op.operation {
                DeliveryTarget::WriteFile { path, .. } => Some(path),
                DeliveryTarget::PrintToStdout { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_written: usize,
}

#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}
