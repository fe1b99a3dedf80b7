use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Output format for parsed lines: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
    /// Treat a line with any failed segment as a failure instead of
    /// printing the partial pipeline.
    #[serde(default)]
    pub fail_fast: bool,
    /// Log level for stage diagnostics: off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    "text".into()
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: default_format(),
            fail_fast: false,
            log_level: default_log_level(),
        }
    }
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    format: Option<String>,
    fail_fast: Option<bool>,
    log_level: Option<String>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/pipereel/config.toml (if exists)
    ///
    /// Scalars set in the overlay override; omitted keys keep defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/pipereel/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/pipereel/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("pipereel: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.format {
            self.settings.format = v;
        }
        if let Some(v) = s.fail_fast {
            self.settings.fail_fast = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
    }

    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).expect("test overlay must parse");
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::default_config();
        assert_eq!(config.settings.format, "text");
        assert!(!config.settings.fail_fast);
        assert_eq!(config.settings.log_level, "warn");
    }

    #[test]
    fn overlay_scalar_overrides() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            format = "json"
            fail_fast = true
        "#,
        );
        assert_eq!(config.settings.format, "json");
        assert!(config.settings.fail_fast);
        // Omitted keys keep defaults
        assert_eq!(config.settings.log_level, "warn");
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.settings.format, "text");
        assert!(!config.settings.fail_fast);
    }
}
