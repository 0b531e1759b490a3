//! `EngineError`: orchestration-level failures. Wraps [`sepro_core::ModelError`]
//! rather than duplicating its variants, matching the teacher's
//! `RunError`/`SearchRunError` pattern of wrapping the layer below by
//! reference instead of flattening it.

use std::fmt;

use sepro_core::ModelError;

/// A recoverable failure raised by `sepro-runtime`'s orchestration
/// layer. All recoverable failures in this crate originate in
/// `sepro-core`'s [`ModelError`]; `EngineError` exists so callers match
/// on one error type per crate boundary, as the teacher does with
/// `RunError` wrapping `WorldHarnessError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Forwarded from `sepro-core`.
    Model(ModelError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ModelError> for EngineError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}
