use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Unknown simulation scenario '{id}'")]
    UnknownScenario { id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeskError {
    /// Shorthand for the id-lookup failure every store operation shares.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
