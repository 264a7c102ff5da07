use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("patient ID must not be empty")]
    EmptyPatientId,

    #[error("patient ID already saved: {0}")]
    DuplicatePatientId(String),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
