//! Command-line interface definitions.
//!
//! Every argument is optional: running the binary with no arguments
//! regenerates both artifacts from the default `demo/` tree.

use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Regenerate demo/demo.html and demo/lottie/manifest.json
/// lottie_demo
///
/// # Only the demo page, from a different directory
/// lottie_demo html --source-dir build/animations --output build/animations/index.html
///
/// # Both artifacts, with filenames escaped
/// lottie_demo --escape --config lottie_demo.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Percent-encode filenames in the HTML page and JSON-escape them in the manifest
    #[arg(long, global = true)]
    pub escape: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate both the demo page and the manifest (the default)
    All,
    /// Generate the HTML demo page only
    Html(PathOverrides),
    /// Generate the JSON manifest only
    Manifest(PathOverrides),
}

/// Per-generator path overrides.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    /// Directory to scan for animation files
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// File to write the artifact to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only list files whose name ends with this suffix
    #[arg(long)]
    pub suffix: Option<String>,
}

/// Which generators a run should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub html: bool,
    pub manifest: bool,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }

    pub fn selection(&self) -> Selection {
        match self.command() {
            Command::All => Selection {
                html: true,
                manifest: true,
            },
            Command::Html(_) => Selection {
                html: true,
                manifest: false,
            },
            Command::Manifest(_) => Selection {
                html: false,
                manifest: true,
            },
        }
    }

    /// Layer the command-line flags on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.escape {
            config.escape = true;
        }
        match self.command() {
            Command::All => {}
            Command::Html(o) => {
                if let Some(dir) = o.source_dir {
                    config.html.source_dir = dir;
                }
                if let Some(output) = o.output {
                    config.html.output = output;
                }
                if let Some(suffix) = o.suffix {
                    config.html.suffix = suffix;
                }
            }
            Command::Manifest(o) => {
                if let Some(dir) = o.source_dir {
                    config.manifest.source_dir = dir;
                }
                if let Some(output) = o.output {
                    config.manifest.output = output;
                }
                if let Some(suffix) = o.suffix {
                    config.manifest.suffix = suffix;
                }
            }
        }
        config
    }
}
