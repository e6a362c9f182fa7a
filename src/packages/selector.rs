//! Package manager selection
//!
//! An explicit override wins. Otherwise the first manager (npm, yarn, pnpm,
//! bun) whose lockfile sits in the project root owns the project.

use crate::core::types::ManagerKind;
use crate::error::{Result, UpgradeError};
use crate::packages::PackageManager;
use crate::packages::registry::ManagerRegistry;
use crate::traits::FileProbe;
use crate::ui;
use std::path::Path;

pub fn select_manager(
    override_name: Option<&str>,
    probe: &dyn FileProbe,
    registry: &ManagerRegistry,
    project_root: &Path,
) -> Result<Box<dyn PackageManager>> {
    if let Some(name) = override_name {
        let kind: ManagerKind = name.parse()?;
        let manager = registry.create(kind)?;
        ui::info(&format!("Using {} (explicitly requested)", kind));
        return Ok(manager);
    }

    for kind in registry.registered() {
        let manager = registry.create(kind)?;
        let found = std::iter::once(manager.lock_file_name())
            .chain(manager.lock_file_aliases().iter().copied())
            .find(|lock_file| probe.exists(lock_file));

        if let Some(lock_file) = found {
            ui::info(&format!("Found {}, using {}", lock_file, kind));
            return Ok(manager);
        }
    }

    Err(UpgradeError::NoManagerDetected {
        dir: project_root.to_path_buf(),
    })
}
