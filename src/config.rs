use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub variables: VariablesConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path; `~` is expanded. Empty disables logging.
    #[serde(default)]
    pub log_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

fn default_prompt() -> String {
    "vars> ".into()
}

fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// History file path; `~` is expanded. Empty disables history.
    #[serde(default)]
    pub file: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_max_entries() -> usize {
    1000
}

/// Preset bindings seeded into every new session.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct VariablesConfig {
    #[serde(default)]
    pub define: IndexMap<String, String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    history: HistoryOverlay,
    #[serde(default)]
    variables: VariablesOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    prompt: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct HistoryOverlay {
    file: Option<String>,
    max_entries: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct VariablesOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    define: IndexMap<String, String>,
    #[serde(default)]
    remove: Vec<String>,
}

// ── Merge logic ──

/// Merge user bindings into default bindings.
/// In replace mode: user bindings replace defaults entirely.
/// In merge mode: remove names first, then insert additions (user value wins).
fn merge_map(
    base: &mut IndexMap<String, String>,
    add: IndexMap<String, String>,
    remove: &[String],
    replace: bool,
) {
    if replace {
        *base = add;
    } else {
        base.retain(|name, _| !remove.contains(name));
        base.extend(add);
    }
}

/// Expand a leading `~` and environment references in a configured path.
fn expand_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let expanded = shellexpand::full(raw).unwrap_or_else(|_| shellexpand::tilde(raw));
    Some(PathBuf::from(expanded.as_ref()))
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Location of the user overlay: ~/.config/shvars/config.toml.
    pub fn user_config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(Path::new(&home).join(".config/shvars/config.toml"))
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/shvars/config.toml (if exists)
    ///
    /// A missing or unparsable user overlay leaves the defaults in place.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_user_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Load defaults merged with the overlay at `path`.
    ///
    /// Unlike [`Config::load`], the file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay: ConfigOverlay = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::default_config();
        config.apply_overlay(overlay);
        Ok(config)
    }

    /// Try to load the user overlay from ~/.config/shvars/config.toml.
    fn load_user_overlay() -> Option<ConfigOverlay> {
        let path = Self::user_config_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("shvars: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        let s = overlay.settings;
        if let Some(v) = s.prompt {
            self.settings.prompt = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }

        // History
        let h = overlay.history;
        if let Some(v) = h.file {
            self.history.file = v;
        }
        if let Some(v) = h.max_entries {
            self.history.max_entries = v;
        }

        // Variables
        let v = overlay.variables;
        merge_map(&mut self.variables.define, v.define, &v.remove, v.replace);
    }

    /// Resolved history file, or `None` when history is disabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        expand_path(&self.history.file)
    }

    /// Resolved log file, or `None` when logging is disabled.
    pub fn log_path(&self) -> Option<PathBuf> {
        expand_path(&self.settings.log_file)
    }

    /// Serialize the merged configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.settings.prompt, "vars> ");
        assert_eq!(config.settings.log_level, "warn");
        assert!(!config.history.file.is_empty());
        assert_eq!(config.history.max_entries, 1000);
    }

    #[test]
    fn default_config_has_no_presets() {
        let config = Config::default_config();
        assert!(config.variables.define.is_empty());
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_overrides_prompt() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            prompt = "user@! > "
        "#,
        );
        assert_eq!(config.settings.prompt, "user@! > ");
        // Settings not in overlay remain at defaults
        assert_eq!(config.settings.log_level, "warn");
    }

    #[test]
    fn overlay_overrides_history() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [history]
            file = ""
            max_entries = 10
        "#,
        );
        assert!(config.history_path().is_none());
        assert_eq!(config.history.max_entries, 10);
    }

    #[test]
    fn overlay_extends_variables() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [variables.define]
            uploadfn = "theverylonguploadfile.txt"
            user = "alice"
        "#,
        );
        assert_eq!(
            config.variables.define.get("uploadfn").map(String::as_str),
            Some("theverylonguploadfile.txt")
        );
        let names: Vec<&str> = config.variables.define.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["uploadfn", "user"]);
    }

    #[test]
    fn overlay_removes_and_adds_variables() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [variables.define]
            a = "1"
            b = "2"
        "#,
        );
        config.apply_overlay_str(
            r#"
            [variables]
            remove = ["a"]
            define = { b = "3", c = "4" }
        "#,
        );
        assert!(!config.variables.define.contains_key("a"));
        assert_eq!(config.variables.define.get("b").map(String::as_str), Some("3"));
        assert_eq!(config.variables.define.get("c").map(String::as_str), Some("4"));
    }

    #[test]
    fn overlay_replace_variables() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [variables.define]
            a = "1"
        "#,
        );
        config.apply_overlay_str(
            r#"
            [variables]
            replace = true
            define = { z = "26" }
        "#,
        );
        let names: Vec<&str> = config.variables.define.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["z"]);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.settings.prompt, original.settings.prompt);
        assert_eq!(config.history.file, original.history.file);
        assert_eq!(config.variables.define, original.variables.define);
    }

    #[test]
    fn history_path_expands_tilde() {
        let config = Config::default_config();
        let path = config.history_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with(".shvars_history"));
    }

    #[test]
    fn empty_log_file_disables_logging() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            log_file = "  "
        "#,
        );
        assert!(config.log_path().is_none());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [settings]
            log_level = "debug"

            [variables.define]
            greeting = "  hi  "
        "#
        )
        .unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.settings.log_level, "debug");
        assert_eq!(
            config.variables.define.get("greeting").map(String::as_str),
            Some("  hi  ")
        );
        // Defaults still apply to untouched sections
        assert_eq!(config.history.max_entries, 1000);
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings\nprompt = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn dump_round_trips() {
        let mut config = Config::default_config();
        config.variables.define.insert("a".into(), "1".into());
        let dumped = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&dumped).unwrap();
        assert_eq!(parsed.variables.define, config.variables.define);
        assert_eq!(parsed.settings.prompt, config.settings.prompt);
    }
}
