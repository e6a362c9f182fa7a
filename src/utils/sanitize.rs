//! Input sanitization for values placed into shell command strings
//!
//! Package names come from package.json and the target version comes from
//! the command line; both end up inside a string handed to `sh -c`.

use crate::error::{Result, UpgradeError};
use regex::Regex;
use std::sync::LazyLock;

/// Characters npm allows in (scoped) package names.
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._~/-]+$").expect("Invalid regex pattern"));

/// Dist-tags, exact versions and `^`/`~` ranges. An operator must be
/// followed by an actual version, and glob characters are never allowed.
static SAFE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\^~]?[a-zA-Z0-9][a-zA-Z0-9.+_-]*$").expect("Invalid regex pattern")
});

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\s]"#).expect("Invalid regex pattern"));

/// Validate a package name is safe to place in a shell command.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 256 {
        return Err(UpgradeError::InvalidPackageName(truncate(name)));
    }

    if SHELL_DANGEROUS.is_match(name) || !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(UpgradeError::InvalidPackageName(name.to_string()));
    }

    if name.contains("..") {
        return Err(UpgradeError::InvalidPackageName(name.to_string()));
    }

    Ok(())
}

/// Validate a list of package names
pub fn validate_package_names(names: &[String]) -> Result<()> {
    for name in names {
        validate_package_name(name)?;
    }
    Ok(())
}

/// Validate the requested target version or dist-tag.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() || SHELL_DANGEROUS.is_match(version) || !SAFE_VERSION.is_match(version)
    {
        return Err(UpgradeError::InvalidVersion(version.to_string()));
    }
    Ok(())
}

fn truncate(input: &str) -> String {
    input.chars().take(50).collect()
}
