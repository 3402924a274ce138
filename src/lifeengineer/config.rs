use crate::error::{CmsError, Result};
use crate::session::Credentials;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Operator configuration, stored as `config.json` in the store root.
///
/// The only knob today is the credential pair; absent file or absent fields
/// fall back to the deployed defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CmsConfig {
    #[serde(default)]
    pub credentials: Credentials,
}

impl CmsConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CmsError::Io)?;
        let config: CmsConfig = serde_json::from_str(&content).map_err(CmsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CmsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CmsError::Serialization)?;
        fs::write(config_path, content).map_err(CmsError::Io)?;
        Ok(())
    }
}
