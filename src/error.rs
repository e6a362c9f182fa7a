use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error(
        "Could not find a package.json file at '{}'. Please run `upgrade-remix` from your app's root directory.",
        path.display()
    )]
    ManifestNotFound { path: PathBuf },

    #[error("Parsing error in '{file}': {message}")]
    ManifestParse { file: String, message: String },

    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error(
        "Unsupported package manager: no package-lock.json, yarn.lock, pnpm-lock.yaml or bun.lockb found in '{}'",
        dir.display()
    )]
    NoManagerDetected { dir: PathBuf },

    #[error("Unknown package manager '{0}' (expected one of: npm, yarn, pnpm, bun)")]
    UnknownManager(String),

    #[error(
        "Could not detect the framework: neither @remix-run/react nor react-router packages found in package.json"
    )]
    FrameworkNotDetected,

    #[error(
        "Both Remix and React Router packages found in package.json; cannot decide which framework to upgrade"
    )]
    AmbiguousFramework,

    #[error("Package name contains unsafe characters: {0}")]
    InvalidPackageName(String),

    #[error("Invalid target version '{0}' (expected a dist-tag, a version, or a ^/~ range)")]
    InvalidVersion(String),

    #[error("Command '{command}' failed: {reason}")]
    SubprocessFailed { command: String, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, UpgradeError>;
