use crate::error::UpgradeError;
use std::fmt;
use std::str::FromStr;

// Supported package managers, in lockfile detection priority order.
// To add one, add a variant here and update:
// - ManagerKind::ALL and Display / FromStr
// - ManagerRegistry::register_defaults()
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ManagerKind {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl ManagerKind {
    pub const ALL: [ManagerKind; 4] = [
        ManagerKind::Npm,
        ManagerKind::Yarn,
        ManagerKind::Pnpm,
        ManagerKind::Bun,
    ];
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Pnpm => write!(f, "pnpm"),
            Self::Bun => write!(f, "bun"),
        }
    }
}

impl FromStr for ManagerKind {
    type Err = UpgradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(UpgradeError::UnknownManager(s.to_string())),
        }
    }
}

/// Framework whose package naming convention drives the upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Remix,
    ReactRouter,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remix => write!(f, "Remix"),
            Self::ReactRouter => write!(f, "React Router"),
        }
    }
}

/// Version, dist-tag or `^`/`~` range requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl TargetVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact unless the version carries a leading `^` or `~`.
    ///
    /// Dist-tags such as `latest` count as exact: the manager resolves the
    /// tag and records the resolved version with its exact-pin flag.
    pub fn is_exact(&self) -> bool {
        !(self.0.starts_with('^') || self.0.starts_with('~'))
    }

    /// Version as rendered after `name@`, without the range operator.
    pub fn install_spec(&self) -> &str {
        self.0
            .strip_prefix('^')
            .or_else(|| self.0.strip_prefix('~'))
            .unwrap_or(&self.0)
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        Self::new(crate::project_identity::DEFAULT_TARGET_VERSION)
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
