//! Configuration management for navmenu.
//!
//! Parses `navmenu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [source]
//! path = "html/menudata.js"
//! format = "auto"
//!
//! [render]
//! style = "tree"
//! indent = 2
//! max_depth = 3
//! link_prefix = "${DOCS_BASE_URL:-}"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `source.path`
//! - `render.link_prefix`

mod expand;

use std::path::{Path, PathBuf};

use navmenu_render::{DEFAULT_INDENT, RenderStyle};
use navmenu_tree::SourceFormat;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override source file path.
    pub source_path: Option<PathBuf>,
    /// Override source format.
    pub format: Option<SourceFormat>,
    /// Override render style.
    pub style: Option<RenderStyle>,
    /// Override maximum rendered depth.
    pub max_depth: Option<usize>,
    /// Override link prefix.
    pub link_prefix: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navmenu.toml";

/// Source file used when none is configured.
const DEFAULT_SOURCE: &str = "menudata.js";

/// Largest accepted `render.indent`.
const MAX_INDENT: usize = 8;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration (path is a relative string from TOML).
    source: SourceConfigRaw,
    /// Render configuration.
    pub render: RenderConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    path: Option<String>,
    format: Option<SourceFormat>,
}

/// Resolved source configuration with an absolute path.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Navigation source file.
    pub path: PathBuf,
    /// Syntax of the source file.
    pub format: SourceFormat,
}

/// Render configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output style.
    pub style: RenderStyle,
    /// Spaces per level for the `text` style.
    pub indent: usize,
    /// Number of levels to render (all when unset).
    pub max_depth: Option<usize>,
    /// Prefix for relative links.
    pub link_prefix: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            indent: DEFAULT_INDENT,
            max_depth: None,
            link_prefix: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.path`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme when it has one.
fn require_http_scheme(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.contains("://") && !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navmenu.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated again once overrides are in place.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(path) = &settings.source_path {
            self.source_resolved.path.clone_from(path);
        }
        if let Some(format) = settings.format {
            self.source_resolved.format = format;
        }
        if let Some(style) = settings.style {
            self.render.style = style;
        }
        if let Some(max_depth) = settings.max_depth {
            self.render.max_depth = Some(max_depth);
        }
        if let Some(link_prefix) = &settings.link_prefix {
            self.render.link_prefix = Some(link_prefix.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            render: RenderConfig::default(),
            source_resolved: SourceConfig {
                path: base.join(DEFAULT_SOURCE),
                format: SourceFormat::Auto,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()
    }

    /// Validate render configuration.
    fn validate_render(&self) -> Result<(), ConfigError> {
        let indent = self.render.indent;
        if indent == 0 || indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "render.indent must be between 1 and {MAX_INDENT}"
            )));
        }

        if self.render.max_depth == Some(0) {
            return Err(ConfigError::Validation(
                "render.max_depth must be greater than 0".to_owned(),
            ));
        }

        if let Some(ref prefix) = self.render.link_prefix {
            require_http_scheme(prefix, "render.link_prefix")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.source.path {
            self.source.path = Some(expand::expand_env(path, "source.path")?);
        }
        if let Some(ref prefix) = self.render.link_prefix {
            self.render.link_prefix = Some(expand::expand_env(prefix, "render.link_prefix")?);
        }
        Ok(())
    }

    /// Resolve the source path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_resolved = SourceConfig {
            path: config_dir.join(self.source.path.as_deref().unwrap_or(DEFAULT_SOURCE)),
            format: self.source.format.unwrap_or_default(),
        };
    }
}
