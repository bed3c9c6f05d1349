use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ChartRenderError {
    #[error("render backend failure: {0}")]
    Backend(String),
    #[error("image buffer conversion failed")]
    ImageBuffer,
    #[error("png encoding failure: {0}")]
    PngEncoding(String),
}
