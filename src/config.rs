//! Generator configuration.
//!
//! An optional YAML file (passed with `--config`) can override the built-in
//! defaults; CLI flags override both. Every field is optional in the file.
//!
//! ```yaml
//! escape: false
//! html:
//!   source_dir: demo
//!   suffix: .json
//!   output: demo/demo.html
//!   script_src: https://unpkg.com/@lottiefiles/lottie-player@latest/dist/lottie-player.js
//!   # or a vendored copy next to the page: ./lottie-player.js
//!   widget_size: 240
//! manifest:
//!   source_dir: demo/lottie
//!   suffix: .json
//!   output: demo/lottie/manifest.json
//! ```

use crate::error::ConfigError;
use crate::outputs::Job;
use crate::outputs::html::{DEFAULT_WIDGET_SIZE, HtmlDemo, default_script_src};
use crate::outputs::json::JsonManifest;
use crate::scanner::SuffixFilter;
use crate::utils::EscapeMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use url::Url;

/// Top-level configuration, deserialized from YAML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Encode filenames so they cannot break the surrounding HTML or JSON.
    #[serde(default)]
    pub escape: bool,

    #[serde(default)]
    pub html: HtmlConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// `html:` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlConfig {
    #[serde(default = "default_html_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default = "default_html_output")]
    pub output: PathBuf,

    /// Where the page loads the `lottie-player` script from: an absolute URL
    /// or a reference relative to the page.
    #[serde(default = "default_script_src")]
    pub script_src: String,

    /// Width and height of each player in CSS pixels.
    #[serde(default = "default_widget_size")]
    pub widget_size: u32,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            source_dir: default_html_source_dir(),
            suffix: default_suffix(),
            output: default_html_output(),
            script_src: default_script_src(),
            widget_size: default_widget_size(),
        }
    }
}

/// `manifest:` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default = "default_manifest_output")]
    pub output: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: default_manifest_source_dir(),
            suffix: default_suffix(),
            output: default_manifest_output(),
        }
    }
}

fn default_html_source_dir() -> PathBuf {
    "demo".into()
}
fn default_html_output() -> PathBuf {
    "demo/demo.html".into()
}
fn default_manifest_source_dir() -> PathBuf {
    "demo/lottie".into()
}
fn default_manifest_output() -> PathBuf {
    "demo/lottie/manifest.json".into()
}
fn default_suffix() -> String {
    ".json".into()
}
fn default_widget_size() -> u32 {
    DEFAULT_WIDGET_SIZE
}

impl Config {
    /// Load and validate a YAML config file.
    ///
    /// A missing file is an error: asking for a config that isn't there is
    /// almost always a typo.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML text. An empty document yields the defaults.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = if raw.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a generator produce nonsense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.html.suffix.is_empty() {
            return Err(ConfigError::invalid("html.suffix must not be empty"));
        }
        if self.manifest.suffix.is_empty() {
            return Err(ConfigError::invalid("manifest.suffix must not be empty"));
        }
        check_script_src(&self.html.script_src)?;
        if self.html.widget_size == 0 {
            return Err(ConfigError::invalid("html.widget_size must be greater than zero"));
        }
        if self.html.output == self.manifest.output {
            return Err(ConfigError::invalid(format!(
                "html.output and manifest.output are both {:?}",
                self.html.output
            )));
        }
        Ok(())
    }

    pub fn escape_mode(&self) -> EscapeMode {
        EscapeMode::from_flag(self.escape)
    }

    /// The HTML demo generator described by this config.
    pub fn html_job(&self) -> Job<HtmlDemo> {
        Job {
            source_dir: self.html.source_dir.clone(),
            filter: SuffixFilter::new(self.html.suffix.clone()),
            output: self.html.output.clone(),
            renderer: HtmlDemo {
                script_src: self.html.script_src.clone(),
                widget_size: self.html.widget_size,
                escape: self.escape_mode(),
            },
        }
    }

    /// The JSON manifest generator described by this config.
    pub fn manifest_job(&self) -> Job<JsonManifest> {
        Job {
            source_dir: self.manifest.source_dir.clone(),
            filter: SuffixFilter::new(self.manifest.suffix.clone()),
            output: self.manifest.output.clone(),
            renderer: JsonManifest {
                escape: self.escape_mode(),
            },
        }
    }
}

/// Accept an absolute URL or a relative reference that resolves cleanly,
/// as long as it cannot break out of the `src="..."` attribute.
fn check_script_src(src: &str) -> Result<(), ConfigError> {
    if src.trim().is_empty() {
        return Err(ConfigError::invalid("html.script_src must not be empty"));
    }
    if src.contains(['"', '<', '>']) {
        return Err(ConfigError::invalid(format!(
            "html.script_src {src:?} contains a quote or angle bracket"
        )));
    }
    let parsed = match Url::parse(src) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("file:///").expect("valid base URL");
            base.join(src)
        }
        other => other,
    };
    parsed
        .map(|_| ())
        .map_err(|e| ConfigError::invalid(format!("html.script_src {src:?}: {e}")))
}
