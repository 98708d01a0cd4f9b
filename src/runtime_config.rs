//! # Runtime Configuration Module
//!
//! Environment variable configuration for the generator.
//!
//! ## Environment Variables
//!
//! ### `XSPEC_MODELGEN_TEMPLATE`
//!
//! Path of the template that receives the generated code. Relative paths are
//! resolved against the working directory.
//!
//! Default: `template/xspec.cxx`
//!
//! The `--template` command-line flag takes precedence over this variable.
//!
//! Logging is configured separately; see [`crate::logging::LogConfig`].
//!
//! ## Usage
//!
//! ```rust
//! use xspec_modelgen::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Template: {}", config.template.display());
//! ```

use std::env;
use std::path::PathBuf;

use crate::generator::TEMPLATE_PATH;

/// Environment variable overriding the template path.
pub const TEMPLATE_ENV: &str = "XSPEC_MODELGEN_TEMPLATE";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Template file to splice into
    pub template: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            template: PathBuf::from(TEMPLATE_PATH),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let template = lookup(TEMPLATE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(TEMPLATE_PATH));
        RuntimeConfig { template }
    }
}
