//! Configuration for the landing section.
//!
//! Every literal the section renders (word list, link target, asset paths,
//! copy) lives in [`LandingConfig`]. Defaults reproduce the AKS Labs landing
//! section; an optional `.labs/landing.toml` overrides any subset of fields.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cycler::WordList;
use crate::error::ConfigError;

/// Project-relative location of the optional config file.
pub const CONFIG_RELATIVE_PATH: &str = ".labs/landing.toml";

/// Words cycled in the headline when no config overrides them.
pub const DEFAULT_WORDS: [&str; 5] = [
    "cloud computing",
    "cloud native",
    "containers",
    "Kubernetes",
    "Azure Kubernetes Service",
];

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Words cycled by the headline animation
    pub words: WordList,
    /// Internal path the call-to-action link points at
    pub action_path: String,
    /// Label of the call-to-action link
    pub action_label: String,
    /// Resolved URL of the logo image
    pub logo_asset: String,
    /// Alt text of the logo image
    pub logo_alt: String,
    /// Resolved URL of the illustration image
    pub illustration_asset: String,
    /// Line of static text under the headline
    pub subtitle: String,
    /// Animation timing
    pub timing: CyclerTiming,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            words: WordList::from_iter(DEFAULT_WORDS),
            action_path: "/docs/intro".into(),
            action_label: "Browse Workshops".into(),
            logo_asset: "/img/aks-logo-dark.png".into(),
            logo_alt: "AKS Labs logo".into(),
            illustration_asset: "/img/learner.png".into(),
            subtitle: "Grab-and-go resources to help you learn new skills, but also create, \
                       host and share your own workshop."
                .into(),
            timing: CyclerTiming::default(),
        }
    }
}

/// Tick intervals of the typewriter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclerTiming {
    /// Delay between two typed characters
    pub typing_ms: u64,
    /// Dwell time once a word is fully typed
    pub pause_ms: u64,
    /// Delay between two deleted characters
    pub deleting_ms: u64,
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            pause_ms: 1500,
            deleting_ms: 50,
        }
    }
}

impl CyclerTiming {
    /// Per-character typing delay.
    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    /// Dwell on a fully typed word.
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Per-character deletion delay.
    pub fn deleting(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("typing_ms", self.typing_ms),
            ("pause_ms", self.pause_ms),
            ("deleting_ms", self.deleting_ms),
        ];
        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::ZeroInterval { field }),
            None => Ok(()),
        }
    }
}

impl LandingConfig {
    /// Load config from `.labs/landing.toml` in the given root directory.
    ///
    /// Falls back to defaults (with a warning) when the file is missing or
    /// invalid, so a broken project file never blocks rendering.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_RELATIVE_PATH);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, is not valid
    /// TOML, or sets a zero timing interval.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.timing.validate()?;
        if config.words.is_empty() {
            tracing::warn!(
                "{} has an empty word list; the headline will not animate",
                path.display()
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let labs_dir = dir.path().join(".labs");
        std::fs::create_dir_all(&labs_dir).expect("create .labs");
        let path = labs_dir.join("landing.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = LandingConfig::default();
        assert_eq!(config.words.len(), 5);
        assert_eq!(config.words.get(0), Some("cloud computing"));
        assert_eq!(config.words.get(4), Some("Azure Kubernetes Service"));
        assert_eq!(config.action_path, "/docs/intro");
        assert_eq!(config.logo_asset, "/img/aks-logo-dark.png");
        assert_eq!(config.illustration_asset, "/img/learner.png");
        assert_eq!(config.timing, CyclerTiming::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = LandingConfig::load(temp.path());
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
words = ["containers", "Kubernetes"]
action_path = "/docs/start"

[timing]
pause_ms = 800
"#,
        );

        let config = LandingConfig::load(temp.path());
        assert_eq!(config.words.len(), 2);
        assert_eq!(config.words.get(1), Some("Kubernetes"));
        assert_eq!(config.action_path, "/docs/start");
        assert_eq!(config.logo_asset, "/img/aks-logo-dark.png");
        assert_eq!(config.timing.pause_ms, 800);
        assert_eq!(config.timing.typing_ms, 100);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[timing]\ndeleting_ms = 0\n");

        let err = LandingConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroInterval {
                field: "deleting_ms"
            }
        ));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "words = [unterminated");

        let err = LandingConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("landing.toml"));
    }

    #[test]
    fn test_invalid_project_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[timing]\ntyping_ms = 0\n");

        let config = LandingConfig::load(temp.path());
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_empty_word_list_is_accepted() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "words = []\n");

        let config = LandingConfig::load_from_path(&path).expect("empty list loads");
        assert!(config.words.is_empty());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = LandingConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
