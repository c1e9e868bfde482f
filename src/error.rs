use thiserror::Error;

use crate::{ClassifyError, ConfigError};

/// Unified error type covering table compilation and classification.
///
/// Convenient for callers driving the full pipeline behind one `?`.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
