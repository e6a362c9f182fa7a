//! npm package manager

use crate::core::types::ManagerKind;
use crate::packages::command::{InstallFlags, InstallRequest, render_install};
use crate::packages::traits::PackageManager;

const FLAGS: InstallFlags = InstallFlags {
    program: "npm",
    verb: "install",
    force: "--force",
    save_prod: Some("--save"),
    save_dev: "--save-dev",
    exact: "--save-exact",
};

pub struct NpmManager;

impl PackageManager for NpmManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Npm
    }

    fn lock_file_name(&self) -> &'static str {
        "package-lock.json"
    }

    fn program(&self) -> &'static str {
        FLAGS.program
    }

    fn install_command(&self, request: &InstallRequest<'_>) -> String {
        render_install(&FLAGS, request)
    }

    fn sync_command(&self) -> String {
        "npm ci".to_string()
    }

    fn list_command(&self, package: &str) -> String {
        format!("npm ls {}", package)
    }
}
