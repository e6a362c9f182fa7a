//! pnpm package manager

use crate::core::types::ManagerKind;
use crate::packages::command::{InstallFlags, InstallRequest, render_install};
use crate::packages::traits::PackageManager;

const FLAGS: InstallFlags = InstallFlags {
    program: "pnpm",
    verb: "add",
    force: "--force",
    save_prod: None,
    save_dev: "--save-dev",
    exact: "--save-exact",
};

pub struct PnpmManager;

impl PackageManager for PnpmManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Pnpm
    }

    fn lock_file_name(&self) -> &'static str {
        "pnpm-lock.yaml"
    }

    fn program(&self) -> &'static str {
        FLAGS.program
    }

    fn install_command(&self, request: &InstallRequest<'_>) -> String {
        render_install(&FLAGS, request)
    }

    fn sync_command(&self) -> String {
        "pnpm install --frozen-lockfile".to_string()
    }

    fn list_command(&self, package: &str) -> String {
        format!("pnpm list {}", package)
    }
}
