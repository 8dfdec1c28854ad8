use thiserror::Error;

pub type LiftResult<T> = Result<T, LiftError>;

#[derive(Error, Debug)]
pub enum LiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Required column '{0}' is missing from dataset")]
    MissingColumn(String),

    #[error("Score column is missing or misaligned: {expected} rows, {actual} scores")]
    MissingScores { expected: usize, actual: usize },

    #[error("Dataset has no rows to evaluate")]
    EmptyDataset,

    #[error("Model training error: {0}")]
    Training(String),

    #[error("Model loading error: {0}")]
    ModelLoad(String),

    #[error("Model save error: {0}")]
    ModelSave(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
