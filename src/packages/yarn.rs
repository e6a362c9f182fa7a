//! Yarn package manager

use crate::core::types::ManagerKind;
use crate::packages::command::{InstallFlags, InstallRequest, render_install};
use crate::packages::traits::PackageManager;

const FLAGS: InstallFlags = InstallFlags {
    program: "yarn",
    verb: "add",
    force: "--force",
    save_prod: None,
    save_dev: "--dev",
    exact: "--exact",
};

pub struct YarnManager;

impl PackageManager for YarnManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Yarn
    }

    fn lock_file_name(&self) -> &'static str {
        "yarn.lock"
    }

    fn program(&self) -> &'static str {
        FLAGS.program
    }

    fn install_command(&self, request: &InstallRequest<'_>) -> String {
        render_install(&FLAGS, request)
    }

    fn sync_command(&self) -> String {
        "yarn install --frozen-lockfile".to_string()
    }

    fn list_command(&self, package: &str) -> String {
        format!("yarn list --pattern {}", package)
    }
}
