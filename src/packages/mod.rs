//! # Package Manager Implementations
//!
//! One module per supported manager. Each renders its install, sync and list
//! commands from the shared policies in [`command`]; none of them run
//! anything themselves.
//!
//! ## PackageManager Trait
//!
//! - `lock_file_name()` - lockfile that marks project ownership
//! - `install_command()` - upgrade a group of packages
//! - `sync_command()` - reinstall from the lockfile
//! - `list_command()` - show installed versions of one package
//!
//! ## Usage
//!
//! ```rust
//! use upgrade_remix::core::types::{ManagerKind, TargetVersion};
//! use upgrade_remix::packages::{InstallRequest, ManagerRegistry};
//! use upgrade_remix::utils::platform::Platform;
//!
//! let registry = ManagerRegistry::with_defaults(Platform::unix());
//! let npm = registry.create(ManagerKind::Npm)?;
//! let packages = vec!["remix".to_string()];
//! let version = TargetVersion::new("2.0.0");
//! let cmd = npm.install_command(&InstallRequest {
//!     packages: &packages,
//!     version: &version,
//!     dev: false,
//!     force: false,
//! });
//! assert_eq!(cmd, "npm install --save --save-exact remix@2.0.0");
//! # Ok::<(), upgrade_remix::error::UpgradeError>(())
//! ```

pub mod bun;
pub mod command;
pub mod npm;
pub mod pnpm;
pub mod registry;
pub mod selector;
pub mod traits;
pub mod yarn;

pub use command::InstallRequest;
pub use registry::ManagerRegistry;
pub use selector::select_manager;
pub use traits::PackageManager;
