//! Framework detection and dependency classification
//!
//! Decides which framework a project uses and which of its manifest keys
//! belong to that framework's release train.

use crate::core::manifest::{DependencyMap, Manifest};
use crate::core::types::Framework;
use crate::error::{Result, UpgradeError};

pub const REMIX_MARKER: &str = "@remix-run/react";
pub const REACT_ROUTER_MARKER: &str = "react-router";

const REMIX_SCOPE: &str = "@remix-run/";
const REMIX_V1_COMPAT_PREFIX: &str = "@remix-run/v1-";
const REMIX_ROUTER: &str = "@remix-run/router";
const REACT_ROUTER_SCOPE: &str = "@react-router/";
const REACT_ROUTER_DOM: &str = "react-router-dom";

/// Router-adjacent packages always shown by `--list-versions` when present.
pub const SENTINEL_PACKAGES: [&str; 3] = [REMIX_ROUTER, REACT_ROUTER_MARKER, REACT_ROUTER_DOM];

/// Whether `name` follows the framework's package naming convention.
pub fn is_framework_package(name: &str, framework: Framework) -> bool {
    match framework {
        Framework::Remix => {
            (name.starts_with(REMIX_SCOPE) || name == "remix")
                && !name.starts_with(REMIX_V1_COMPAT_PREFIX)
                && name != REMIX_ROUTER
        }
        Framework::ReactRouter => {
            name.starts_with(REACT_ROUTER_SCOPE)
                || name == REACT_ROUTER_MARKER
                || name == REACT_ROUTER_DOM
        }
    }
}

/// Keys of `deps` that belong to `framework`, in manifest order.
pub fn classify(deps: &DependencyMap, framework: Framework) -> Vec<String> {
    deps.keys()
        .filter(|name| is_framework_package(name, framework))
        .cloned()
        .collect()
}

/// Detect the framework from marker packages, falling back to naming.
pub fn detect_framework(manifest: &Manifest) -> Result<Framework> {
    let remix_marker = manifest.contains(REMIX_MARKER);
    let router_marker = manifest.contains(REACT_ROUTER_MARKER);

    match (remix_marker, router_marker) {
        (true, false) => return Ok(Framework::Remix),
        (false, true) => return Ok(Framework::ReactRouter),
        (true, true) => return Err(UpgradeError::AmbiguousFramework),
        (false, false) => {}
    }

    let names = manifest.all_names();
    let remix = names
        .iter()
        .any(|name| is_framework_package(name, Framework::Remix));
    let router = names
        .iter()
        .any(|name| is_framework_package(name, Framework::ReactRouter));

    match (remix, router) {
        (true, false) => Ok(Framework::Remix),
        (false, true) => Ok(Framework::ReactRouter),
        (true, true) => Err(UpgradeError::AmbiguousFramework),
        (false, false) => Err(UpgradeError::FrameworkNotDetected),
    }
}

/// Packages inspected by `--list-versions`: framework packages from both
/// sections, then any sentinel present in the manifest.
pub fn list_targets(manifest: &Manifest, framework: Framework) -> Vec<String> {
    let mut targets: Vec<String> = manifest
        .all_names()
        .into_iter()
        .filter(|name| is_framework_package(name, framework))
        .map(str::to_string)
        .collect();

    for sentinel in SENTINEL_PACKAGES {
        if manifest.contains(sentinel) && !targets.iter().any(|t| t == sentinel) {
            targets.push(sentinel.to_string());
        }
    }

    targets
}
