use crate::core::types::ManagerKind;
use crate::packages::command::InstallRequest;

/// Command templates for one package manager.
///
/// Implementations only render strings; running them is the job of a
/// [`CommandRunner`](crate::traits::CommandRunner).
pub trait PackageManager: Send + Sync {
    fn kind(&self) -> ManagerKind;

    /// Lockfile whose presence marks a project as owned by this manager.
    fn lock_file_name(&self) -> &'static str;

    /// Other lockfile names written by some releases of the manager.
    fn lock_file_aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Executable the rendered commands start with.
    fn program(&self) -> &'static str;

    fn install_command(&self, request: &InstallRequest<'_>) -> String;

    /// Reinstall everything from the lockfile after the upgrade.
    fn sync_command(&self) -> String;

    /// Show the installed version(s) of one package.
    fn list_command(&self, package: &str) -> String;

    fn is_available(&self) -> bool {
        which::which(self.program()).is_ok()
    }
}
