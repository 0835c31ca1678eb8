//! Configuration loading.
//!
//! Override order: defaults, then `config.json`, then command-line flags.
//! The file lives under the platform's local data directory unless a path is
//! given explicitly.

use hanoi_core::HanoiConfig;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Values given on the command line; `None` keeps the file/default value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_visual_n: Option<u32>,
    pub max_timing_n: Option<u32>,
    pub max_growth_n: Option<u32>,
    pub animation_delay_ms: Option<u64>,
}

/// Directory holding the config file and the log
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hanoi")
}

/// Default location of `config.json`
pub fn default_config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Read the config at `path`.
///
/// A missing file gives the defaults. A file that cannot be read or parsed is
/// logged and also gives the defaults.
pub fn load(path: &Path) -> HanoiConfig {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            return HanoiConfig::default();
        }
        Err(e) => {
            warn!("Failed to read config {}: {}", path.display(), e);
            return HanoiConfig::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring malformed config {}: {}", path.display(), e);
            HanoiConfig::default()
        }
    }
}

/// Apply command-line overrides on top of `config`.
pub fn resolve(mut config: HanoiConfig, overrides: &Overrides) -> HanoiConfig {
    if let Some(n) = overrides.max_visual_n {
        config.max_visual_n = n;
    }
    if let Some(n) = overrides.max_timing_n {
        config.max_timing_n = n;
    }
    if let Some(n) = overrides.max_growth_n {
        config.max_growth_n = n;
    }
    if let Some(ms) = overrides.animation_delay_ms {
        config.animation_delay_ms = ms;
    }
    debug!("Resolved config: {:?}", config);
    config
}

/// Write `config` to `path` as pretty JSON, creating parent directories.
pub fn save(config: &HanoiConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hanoi-settings-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        assert_eq!(load(&path), HanoiConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let config = HanoiConfig {
            max_visual_n: 9,
            animation_delay_ms: 250,
            ..HanoiConfig::default()
        };
        save(&config, &path).unwrap();
        assert_eq!(load(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load(&path), HanoiConfig::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_overrides_win() {
        let file = HanoiConfig {
            max_visual_n: 10,
            max_timing_n: 20,
            ..HanoiConfig::default()
        };
        let overrides = Overrides {
            max_visual_n: Some(12),
            animation_delay_ms: Some(5),
            ..Overrides::default()
        };
        let resolved = resolve(file, &overrides);
        assert_eq!(resolved.max_visual_n, 12);
        assert_eq!(resolved.max_timing_n, 20);
        assert_eq!(resolved.animation_delay_ms, 5);
    }
}
