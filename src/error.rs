use thiserror::Error;

use crate::charts::ChartRenderError;
use crate::payload::PayloadError;
use crate::timeframe::InvalidTimeframe;

/// Every pipeline failure is recovered into one structured error response;
/// `user_message` is what ends up in the `error` field on stdout.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("invalid input: {0}")]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Timeframe(#[from] InvalidTimeframe),
    #[error("chart rendering failed: {0}")]
    Render(#[from] ChartRenderError),
}

impl AppError {
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::Payload(error) => format!("Invalid input: {}", error),
            Self::Timeframe(error) => error.to_string(),
            Self::Render(error) => format!("Chart rendering failed: {}", error),
        }
    }
}
