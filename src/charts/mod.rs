mod bar;
mod encode;
mod error;
mod line;
mod style;
mod types;


pub(crate) use error::ChartRenderError;

use crate::config::ChartSettings;
use crate::payload::SessionRecord;
use crate::timeframe::Timeframe;

use types::{chart_catalog, ChartDef, ChartKind};

/// Renders the four fixed comparison charts over the filtered record set and
/// returns them as base64-encoded PNGs. An empty record set produces an empty
/// list without touching the render backend.
pub(crate) fn render_all(
    records: &[SessionRecord],
    timeframe: Timeframe,
    settings: &ChartSettings,
) -> Result<Vec<String>, ChartRenderError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut graphs = Vec::with_capacity(chart_catalog().len());
    for definition in chart_catalog() {
        let caption = format!("{} - {}", definition.title, timeframe.code());
        // Each raster buffer is dropped before the next chart renders, so
        // peak memory stays at one chart's worth.
        let rgb_buffer = match definition.kind {
            ChartKind::Line => line::render(records, &definition, &caption, settings)?,
            ChartKind::GroupedBar => bar::render(records, &definition, &caption, settings)?,
        };
        let png_bytes = encode::rgb_to_cropped_png(
            rgb_buffer,
            settings.width_px,
            settings.height_px,
            settings.crop_padding_px,
        )?;
        graphs.push(encode::to_base64(&png_bytes));
    }

    Ok(graphs)
}

/// Upper y bound covering both series with a little headroom. All-zero data
/// still gets a non-degenerate axis.
pub(super) fn y_axis_max(records: &[SessionRecord], definition: &ChartDef) -> f64 {
    let mut max_value: f64 = 0.0;
    for record in records {
        max_value = max_value.max((definition.first.value)(record));
        max_value = max_value.max((definition.second.value)(record));
    }

    if max_value <= 0.0 {
        return 1.0;
    }

    max_value * style::ChartStyle::Y_HEADROOM
}
