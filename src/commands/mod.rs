//! Command handlers
//!
//! Both verbs share the same fatal preconditions, checked by [`prepare`]
//! before any command is rendered or run.

pub mod list_versions;
pub mod upgrade;

use crate::core::framework::detect_framework;
use crate::core::manifest::Manifest;
use crate::core::project::ProjectDir;
use crate::core::types::Framework;
use crate::error::Result;
use crate::packages::{ManagerRegistry, PackageManager, select_manager};
use crate::traits::CommandRunner;
use crate::ui;

/// Everything resolved before the first command runs.
pub struct Context {
    pub project: ProjectDir,
    pub manager: Box<dyn PackageManager>,
    pub manifest: Manifest,
    pub framework: Framework,
}

/// Check the fatal preconditions in order: package.json exists, a package
/// manager is resolvable, the manifest parses, one framework is detected.
pub fn prepare(
    project: ProjectDir,
    manager_override: Option<&str>,
    registry: &ManagerRegistry,
) -> Result<Context> {
    project.ensure_manifest()?;
    let manager = select_manager(manager_override, &project, registry, project.root())?;
    let manifest = Manifest::load(&project.manifest_path())?;
    let framework = detect_framework(&manifest)?;

    Ok(Context {
        project,
        manager,
        manifest,
        framework,
    })
}

/// Trace `cmd` and run it unless `dry_run`.
fn execute(runner: &dyn CommandRunner, cmd: &str, dry_run: bool) -> Result<Option<String>> {
    ui::command(cmd, dry_run);
    if dry_run {
        return Ok(None);
    }
    runner.run(cmd).map(Some)
}
