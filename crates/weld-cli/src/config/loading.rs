use std::path::Path;

use figment::{
    Figment,
    providers::{Format as _, Json, Serialized},
};

use crate::config::WeldConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up from the project root when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "weld.config.json";

impl WeldConfig {
    /// Load configuration.
    /// Priority: explicit config file > `weld.config.json` in `root` > defaults
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = &config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        let config: Self = figment.extract().map_err(|e| ConfigError::Load {
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }
}
