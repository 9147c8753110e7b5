use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ScanFilters;
use crate::log::LogConfig;

/// Top-level configuration for Frameless.
///
/// Loaded from `~/.config/frameless/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Process scanner heuristics: exclusion lists and the graphics
    /// module set.
    pub filters: ScanFilters,
    /// File logging settings.
    pub log: LogConfig,
}

/// Returns the config directory: `~/.config/frameless/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("frameless"))
}

/// Returns the config file path: `~/.config/frameless/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing what
/// went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing or unreadable file silently yields the defaults; the scanner
/// heuristics still work out of the box without an `init`.
pub fn load() -> Config {
    try_load().unwrap_or_default()
}

/// Writes the default configuration file if it does not already exist.
///
/// Returns the path written, or `None` when the file was already there.
pub fn write_default() -> Result<Option<PathBuf>, String> {
    let path = config_path().ok_or("could not determine config path")?;
    if path.exists() {
        return Ok(None);
    }
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(&dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }
    let content = toml::to_string_pretty(&Config::default())
        .map_err(|e| format!("failed to serialize default config: {e}"))?;
    std::fs::write(&path, content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert!(parsed.filters.excludes_name("explorer.exe"));
        assert!(!parsed.log.enabled);
    }

    #[test]
    fn partial_config_keeps_default_sections() {
        let parsed: Config = toml::from_str(
            r#"
            [log]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(parsed.log.enabled);
        assert_eq!(parsed.log.level, "debug");
        // Filters section was absent entirely; defaults apply.
        assert!(parsed.filters.is_graphics_module("d3d11.dll"));
    }

    #[test]
    fn filter_lists_are_overridable_from_toml() {
        let parsed: Config = toml::from_str(
            r#"
            [filters]
            excluded_names = ["onlythis.exe"]
            "#,
        )
        .unwrap();
        assert!(parsed.filters.excludes_name("onlythis.exe"));
        assert!(!parsed.filters.excludes_name("explorer.exe"));
        // Unlisted fields within the section still default.
        assert!(parsed.filters.is_graphics_module("dxgi.dll"));
    }
}
