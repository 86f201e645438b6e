//! tmplsh configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Config file given with --config
//! 3. User-level (~/.config/tmplsh/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tmplsh::util::config::Config;
//!
//! let config: Config = toml::from_str("verbose = true").unwrap();
//! assert!(config.verbose);
//! assert_eq!(config.compiler.program, "clang++");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Session configuration, shared by the shell, its backend and front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Show extra information (compiler command lines, splash notice)
    #[serde(default)]
    pub verbose: bool,
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Compiler settings used by the evaluation backend
    #[serde(default)]
    pub compiler: CompilerConfig,
}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Enable syntax highlighting
    #[serde(default = "default_true")]
    pub syntax_highlight: bool,
    /// Use vi key bindings instead of emacs ones
    #[serde(default)]
    pub vi_mode: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_history_size() -> usize {
    1000
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_file: None,
            history_size: default_history_size(),
            syntax_highlight: true,
            vi_mode: false,
        }
    }
}

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Compiler executable
    #[serde(default = "default_program")]
    pub program: String,
    /// Language standard passed as `-std=`
    #[serde(default = "default_standard")]
    pub standard: String,
    /// Include directories (`-I`)
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,
    /// Macro definitions (`-D`), `NAME` or `NAME=VALUE`
    #[serde(default)]
    pub macros: Vec<String>,
    /// Extra arguments appended verbatim
    #[serde(default)]
    pub extra_args: Vec<String>,
    /// Report compiler warnings (`-w` when false)
    #[serde(default = "default_true")]
    pub warnings: bool,
}

fn default_program() -> String {
    "clang++".to_string()
}

fn default_standard() -> String {
    "c++11".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            standard: default_standard(),
            include_paths: Vec::new(),
            macros: Vec::new(),
            extra_args: Vec::new(),
            warnings: true,
        }
    }
}

impl CompilerConfig {
    /// Arguments shared by every compiler invocation, before the input file
    pub fn common_args(&self) -> Vec<String> {
        let mut args = vec![
            "-x".to_string(),
            "c++".to_string(),
            format!("-std={}", self.standard),
            "-fsyntax-only".to_string(),
            "-fno-color-diagnostics".to_string(),
        ];
        args.extend(
            self.include_paths
                .iter()
                .map(|p| format!("-I{}", p.display())),
        );
        args.extend(self.macros.iter().map(|m| format!("-D{}", m)));
        if !self.warnings {
            args.push("-w".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("tmplsh"));
    }

    // Fallback to ~/.config/tmplsh
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("tmplsh"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("tmplsh"));
    }

    None
}

/// Get the user config file path (~/.config/tmplsh/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Default location of the history file, next to the config file
pub fn default_history_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("history"))
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load user-level configuration
///
/// Returns the default config if the file doesn't exist
pub fn load_user_config() -> Result<Config, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
