//! Bun package manager
//!
//! `bun pm ls` has no package filter, so the list command pipes through the
//! platform's line filter.

use crate::core::types::ManagerKind;
use crate::packages::command::{InstallFlags, InstallRequest, render_install};
use crate::packages::traits::PackageManager;
use crate::utils::platform::Platform;

const FLAGS: InstallFlags = InstallFlags {
    program: "bun",
    verb: "add",
    force: "--force",
    save_prod: None,
    save_dev: "--dev",
    exact: "--exact",
};

pub struct BunManager {
    platform: Platform,
}

impl BunManager {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl PackageManager for BunManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Bun
    }

    fn lock_file_name(&self) -> &'static str {
        "bun.lockb"
    }

    // Text lockfile written since bun 1.2
    fn lock_file_aliases(&self) -> &'static [&'static str] {
        &["bun.lock"]
    }

    fn program(&self) -> &'static str {
        FLAGS.program
    }

    fn install_command(&self, request: &InstallRequest<'_>) -> String {
        render_install(&FLAGS, request)
    }

    fn sync_command(&self) -> String {
        "bun install --frozen-lockfile".to_string()
    }

    fn list_command(&self, package: &str) -> String {
        format!("bun pm ls | {} {}", self.platform.grep_program(), package)
    }
}
