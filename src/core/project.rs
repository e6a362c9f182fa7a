use crate::error::{Result, UpgradeError};
use crate::project_identity;
use crate::traits::FileProbe;
use std::path::{Path, PathBuf};

/// The directory holding package.json and the lockfile.
#[derive(Debug, Clone)]
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(project_identity::MANIFEST_FILE_NAME)
    }

    /// Fail unless package.json exists.
    pub fn ensure_manifest(&self) -> Result<()> {
        if self.exists(project_identity::MANIFEST_FILE_NAME) {
            Ok(())
        } else {
            Err(UpgradeError::ManifestNotFound {
                path: self.manifest_path(),
            })
        }
    }
}

impl FileProbe for ProjectDir {
    fn exists(&self, file_name: &str) -> bool {
        self.root.join(file_name).is_file()
    }
}
