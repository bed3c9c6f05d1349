use std::io::Write;

use serde::Serialize;

/// The single JSON object written to stdout: either the rendered graphs or
/// one error message, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum ResponseEnvelope {
    Graphs { graphs: Vec<String> },
    Error { error: String },
}

impl ResponseEnvelope {
    pub(crate) fn graphs(graphs: Vec<String>) -> Self {
        Self::Graphs { graphs }
    }

    pub(crate) fn error(message: String) -> Self {
        Self::Error { error: message }
    }
}

pub(crate) fn write_response(
    envelope: &ResponseEnvelope,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, envelope).map_err(std::io::Error::from)?;
    writeln!(writer)
}
