use super::schema::ChartSettings;

pub(super) fn default_chart_width_px() -> u32 {
    1000
}

pub(super) fn default_chart_height_px() -> u32 {
    600
}

pub(super) fn default_crop_padding_px() -> u32 {
    8
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width_px: default_chart_width_px(),
            height_px: default_chart_height_px(),
            crop_padding_px: default_crop_padding_px(),
        }
    }
}
