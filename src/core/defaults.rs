use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::local_files::{self, FileSystem};

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "compgen.json";

/// Root configuration structure for compgen.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompgenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the command line leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

fn default_base_path() -> PathBuf {
    PathBuf::from("src/components/shared")
}

/// Load compgen.json from `dir`, falling back to built-in defaults when the
/// file does not exist. A file that exists but does not parse is an error.
pub fn load_config_from(dir: &Path) -> Result<CompgenConfig> {
    let path = dir.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(CompgenConfig::default());
    }

    let content = local_files::local().read(&path)?;

    let config: CompgenConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    if config.defaults.base_path.as_os_str().is_empty() {
        return Err(Error::config_invalid_value(
            "defaults.basePath",
            None,
            "basePath cannot be empty",
        )
        .with_hint(format!("Remove the key from {} to use the default", CONFIG_FILE)));
    }

    Ok(config)
}
