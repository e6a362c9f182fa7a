//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "Upgrade Remix";
pub const BINARY_NAME: &str = "upgrade-remix";
pub const ENV_PREFIX: &str = "UPGRADE_REMIX";
pub const MANIFEST_FILE_NAME: &str = "package.json";
pub const DEFAULT_TARGET_VERSION: &str = "latest";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

/// Environment variable consulted when `--package-manager` is not given.
pub fn package_manager_env_key() -> String {
    env_key("PACKAGE_MANAGER")
}
