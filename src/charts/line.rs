use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;

use crate::config::ChartSettings;
use crate::payload::SessionRecord;

use super::error::ChartRenderError;
use super::style::ChartStyle;
use super::types::ChartDef;

/// Draws both series as marked lines against the date axis and returns the
/// raw RGB raster. Records keep their input order; the axis range is the
/// min/max of the dates, padded when the range is degenerate.
pub(super) fn render(
    records: &[SessionRecord],
    definition: &ChartDef,
    caption: &str,
    settings: &ChartSettings,
) -> Result<Vec<u8>, ChartRenderError> {
    let width = settings.width_px;
    let height = settings.height_px;
    let mut rgb_buffer = vec![255u8; width as usize * height as usize * 3];

    {
        let drawing_area =
            BitMapBackend::with_buffer(&mut rgb_buffer, (width, height)).into_drawing_area();
        drawing_area
            .fill(&ChartStyle::BACKGROUND)
            .map_err(|error| ChartRenderError::Backend(format!("background fill error: {:?}", error)))?;

        let (mut x_start, mut x_end) = date_bounds(records);
        if x_start == x_end {
            x_start -= Duration::hours(12);
            x_end += Duration::hours(12);
        }
        let y_max = super::y_axis_max(records, definition);

        let mut chart = ChartBuilder::on(&drawing_area)
            .margin(ChartStyle::MARGIN)
            .caption(
                caption,
                (ChartStyle::CAPTION_FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
            )
            .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
            .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(x_start..x_end, 0f64..y_max)
            .map_err(|error| ChartRenderError::Backend(format!("chart build error: {:?}", error)))?;

        chart
            .configure_mesh()
            .x_labels(ChartStyle::X_LABEL_COUNT)
            .y_labels(ChartStyle::Y_LABEL_COUNT)
            .x_desc(definition.x_desc)
            .y_desc(definition.y_desc)
            .x_label_formatter(&|date: &DateTime<Utc>| date.format("%Y-%m-%d").to_string())
            .x_label_style(ChartStyle::rotated_label_font())
            .draw()
            .map_err(|error| ChartRenderError::Backend(format!("mesh draw error: {:?}", error)))?;

        for series in [definition.first, definition.second] {
            let color = series.color;
            let points: Vec<(DateTime<Utc>, f64)> = records
                .iter()
                .map(|record| (record.study_date, (series.value)(record)))
                .collect();

            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))
                .map_err(|error| ChartRenderError::Backend(format!("series draw error: {:?}", error)))?
                .label(series.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + ChartStyle::LEGEND_GLYPH_LENGTH, y)], color)
                });

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&point| Circle::new(point, ChartStyle::MARKER_RADIUS, color.filled())),
                )
                .map_err(|error| ChartRenderError::Backend(format!("marker draw error: {:?}", error)))?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(ChartStyle::LEGEND_BACKGROUND_ALPHA))
            .border_style(BLACK)
            .draw()
            .map_err(|error| ChartRenderError::Backend(format!("legend draw error: {:?}", error)))?;

        drawing_area
            .present()
            .map_err(|error| ChartRenderError::Backend(format!("present error: {:?}", error)))?;
    }

    Ok(rgb_buffer)
}

fn date_bounds(records: &[SessionRecord]) -> (DateTime<Utc>, DateTime<Utc>) {
    let mut dates = records.iter().map(|record| record.study_date);
    let first = dates
        .next()
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut start = first;
    let mut end = first;
    for date in dates {
        if date < start {
            start = date;
        }
        if date > end {
            end = date;
        }
    }
    (start, end)
}
