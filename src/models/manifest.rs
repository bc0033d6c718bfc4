//! Local project manifest (`nimbus.json`)

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selections written by `nimbus init`, read back as defaults on re-runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Active project id
    pub project: String,

    /// Short id of the registered app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    /// Short name of the hosting site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// File name looked up in the working directory
pub const MANIFEST_FILE: &str = "nimbus.json";

impl Manifest {
    /// Load the manifest from a directory, if present
    pub fn load(dir: &Path) -> CliResult<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let manifest = serde_json::from_str(&contents)
            .map_err(|e| CliError::Config(format!("Invalid {}: {}", MANIFEST_FILE, e)))?;
        Ok(Some(manifest))
    }

    /// Write the manifest into a directory
    pub fn save(&self, dir: &Path) -> CliResult<()> {
        let path = dir.join(MANIFEST_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents + "\n")?;
        Ok(())
    }
}
