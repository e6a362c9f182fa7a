//! package.json model
//!
//! Only the two dependency sections are read. The file is never written
//! back: the package manager rewrites it as part of the install command.

use crate::error::{Result, UpgradeError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Dependency name to version specifier, in file order.
pub type DependencyMap = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: DependencyMap,
    #[serde(default)]
    pub dev_dependencies: DependencyMap,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| UpgradeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| UpgradeError::ManifestParse {
            file: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Production names followed by dev-only names, without duplicates.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dependencies.keys().map(String::as_str).collect();
        for name in self.dev_dependencies.keys() {
            if !self.dependencies.contains_key(name) {
                names.push(name);
            }
        }
        names
    }
}
