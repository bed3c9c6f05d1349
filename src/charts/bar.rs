use plotters::prelude::*;

use crate::config::ChartSettings;
use crate::payload::SessionRecord;

use super::error::ChartRenderError;
use super::style::ChartStyle;
use super::types::ChartDef;

/// Draws a grouped bar chart: one adjacent pair of bars per record at its
/// index position, first series on the left half of the group, second on the
/// right, x ticks labeled with the record's formatted date.
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

        let count = records.len();
        let x_range = -0.5f64..(count as f64 - 0.5);
        let y_max = super::y_axis_max(records, definition);

        let date_labels: Vec<String> = records
            .iter()
            .map(|record| record.study_date.format("%Y-%m-%d").to_string())
            .collect();

        let mut chart = ChartBuilder::on(&drawing_area)
            .margin(ChartStyle::MARGIN)
            .caption(
                caption,
                (ChartStyle::CAPTION_FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
            )
            .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
            .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(x_range, 0f64..y_max)
            .map_err(|error| ChartRenderError::Backend(format!("chart build error: {:?}", error)))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(count.max(2))
            .y_labels(ChartStyle::Y_LABEL_COUNT)
            .y_desc(definition.y_desc)
            .x_label_formatter(&|position: &f64| {
                let nearest = position.round();
                if (position - nearest).abs() > 0.01 || nearest < 0.0 {
                    return String::new();
                }
                date_labels
                    .get(nearest as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .x_label_style(ChartStyle::rotated_label_font())
            .draw()
            .map_err(|error| ChartRenderError::Backend(format!("mesh draw error: {:?}", error)))?;

        let first = definition.first;
        chart
            .draw_series(records.iter().enumerate().map(|(index, record)| {
                let x = index as f64;
                Rectangle::new(
                    [(x - ChartStyle::BAR_HALF_WIDTH, 0.0), (x, (first.value)(record))],
                    first.color.filled(),
                )
            }))
            .map_err(|error| ChartRenderError::Backend(format!("series draw error: {:?}", error)))?
            .label(first.label)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [(x, y - 5), (x + ChartStyle::LEGEND_GLYPH_LENGTH, y + 5)],
                    first.color.filled(),
                )
            });

        let second = definition.second;
        chart
            .draw_series(records.iter().enumerate().map(|(index, record)| {
                let x = index as f64;
                Rectangle::new(
                    [(x, 0.0), (x + ChartStyle::BAR_HALF_WIDTH, (second.value)(record))],
                    second.color.filled(),
                )
            }))
            .map_err(|error| ChartRenderError::Backend(format!("series draw error: {:?}", error)))?
            .label(second.label)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [(x, y - 5), (x + ChartStyle::LEGEND_GLYPH_LENGTH, y + 5)],
                    second.color.filled(),
                )
            });

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
