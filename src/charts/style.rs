use plotters::prelude::*;
use plotters::style::{FontDesc, FontTransform};

pub(super) struct ChartStyle;

impl ChartStyle {
    pub(super) const MARGIN: i32 = 12;
    pub(super) const CAPTION_FONT_FAMILY: &'static str = "sans-serif";
    pub(super) const CAPTION_FONT_SIZE: i32 = 26;
    pub(super) const LABEL_FONT_SIZE: i32 = 14;
    // Rotated date labels need a deep x label area.
    pub(super) const X_LABEL_AREA_SIZE: u32 = 96;
    pub(super) const Y_LABEL_AREA_SIZE: u32 = 56;
    pub(super) const X_LABEL_COUNT: usize = 8;
    pub(super) const Y_LABEL_COUNT: usize = 6;
    pub(super) const MARKER_RADIUS: i32 = 3;
    pub(super) const BAR_HALF_WIDTH: f64 = 0.4;
    pub(super) const LEGEND_GLYPH_LENGTH: i32 = 18;
    pub(super) const BACKGROUND: RGBColor = WHITE;
    pub(super) const LEGEND_BACKGROUND_ALPHA: f64 = 0.8;
    pub(super) const Y_HEADROOM: f64 = 1.05;

    pub(super) fn rotated_label_font() -> FontDesc<'static> {
        (Self::CAPTION_FONT_FAMILY, Self::LABEL_FONT_SIZE)
            .into_font()
            .transform(FontTransform::Rotate90)
    }
}
