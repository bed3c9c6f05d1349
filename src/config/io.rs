use std::path::Path;

use super::schema::{ChartSettings, ConfigFile};
use super::validate::ConfigError;

/// Loads render settings from an optional TOML file. A missing file is not
/// an error; the program must run with zero setup.
pub(crate) fn load_chart_settings(path: impl AsRef<Path>) -> Result<ChartSettings, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("config_default path={}", path.display());
        return Ok(ChartSettings::default());
    }

    let path_str = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_str.clone(),
        source,
    })?;
    let config: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    config.chart.validate()?;

    log::info!(
        "config_loaded path={} width_px={} height_px={} crop_padding_px={}",
        path.display(),
        config.chart.width_px,
        config.chart.height_px,
        config.chart.crop_padding_px
    );
    Ok(config.chart)
}
