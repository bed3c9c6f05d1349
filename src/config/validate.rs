use thiserror::Error;

use super::schema::ChartSettings;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl ChartSettings {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if !(320..=4096).contains(&self.width_px) {
            return Err(ConfigError::Validation(
                "chart.width_px must be between 320 and 4096".to_string(),
            ));
        }
        if !(240..=2160).contains(&self.height_px) {
            return Err(ConfigError::Validation(
                "chart.height_px must be between 240 and 2160".to_string(),
            ));
        }
        if self.crop_padding_px > 64 {
            return Err(ConfigError::Validation(
                "chart.crop_padding_px must be at most 64".to_string(),
            ));
        }
        Ok(())
    }
}
