use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site settings read from `sitegen.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown pages, one `.html` file per `.md` file.
    pub content_dir: PathBuf,
    /// Copied verbatim into the output directory when present.
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Built-in template when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    /// Prefix for root-relative `href` and `src` links.
    pub basepath: String,
    /// Fail a page on an unclosed `**`, `_` or backtick instead of rendering it as text.
    pub strict_delimiters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: None,
            basepath: "/".to_string(),
            strict_delimiters: false,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    /// Loads `sitegen.toml` from the working directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// Normalises the basepath so it always starts and ends with `/`.
    pub fn normalized_basepath(&self) -> String {
        let trimmed = self.basepath.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    // Expand shell variables and tilde in every configured path
    fn expanded(mut self) -> Self {
        self.content_dir = expand_or_keep(self.content_dir);
        self.static_dir = expand_or_keep(self.static_dir);
        self.output_dir = expand_or_keep(self.output_dir);
        self.template_path = self.template_path.map(expand_or_keep);
        self
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn expand_or_keep(path: PathBuf) -> PathBuf {
    Config::expand_path(&path).unwrap_or(path)
}
