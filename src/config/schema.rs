use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConfigFile {
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChartSettings {
    #[serde(default = "default_chart_width_px")]
    pub width_px: u32,
    #[serde(default = "default_chart_height_px")]
    pub height_px: u32,
    #[serde(default = "default_crop_padding_px")]
    pub crop_padding_px: u32,
}
