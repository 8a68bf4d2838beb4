//! Host configuration and data folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data folder
pub const ROOT_FOLDER_ENV: &str = "TPW_ROOT_FOLDER";

/// Database file name inside the data folder
pub const DATABASE_FILE: &str = "tracker.db";

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `TPW_ROOT_FOLDER` environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Configuration file path for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/tpw/config.toml first, then /etc/tpw/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("tpw").join("config.toml"));
        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/tpw/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("tpw").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {config_path:?}"
        )))
    }
}

/// OS-dependent default data folder
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("tpw"))
        .unwrap_or_else(|| PathBuf::from("./tpw_data"))
}

/// Create the data folder if it does not exist yet
pub fn ensure_root_folder(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Path of the tracker database inside the data folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join(DATABASE_FILE)
}
