use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PayloadError {
    #[error("failed to read standard input: {0}")]
    Read(std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: `studyDate` value {value:?} is not a recognized date")]
    DateParse { index: usize, value: String },
}
