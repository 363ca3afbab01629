//! jnigen.toml manifest parsing

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// jnigen.toml manifest structure
///
/// Command-line flags take precedence over manifest entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Path to the model document
    #[serde(default)]
    pub model: Option<String>,

    /// Output path for the generated fragment blob
    #[serde(default)]
    pub output: Option<String>,
}

impl Manifest {
    /// Load a manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_toml(&content)
    }

    /// Parse a manifest from its TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Load the manifest at `path`; with no path, read `./jnigen.toml` if it
    /// exists and fall back to defaults otherwise.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Path::new("jnigen.toml");
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
