//! Upgrade Command
//!
//! Installs the framework's production and dev packages at the target
//! version, then re-syncs from the lockfile.

use super::{Context, execute};
use crate::core::framework::classify;
use crate::core::types::TargetVersion;
use crate::error::Result;
use crate::packages::InstallRequest;
use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::sanitize;

/// Options for the upgrade command
#[derive(Debug, Clone, Default)]
pub struct UpgradeOptions {
    pub version: TargetVersion,
    /// Print commands without running them
    pub dry_run: bool,
    /// Pass the manager's force flag to installs
    pub force: bool,
    /// Skip the post-install sync
    pub no_sync: bool,
}

/// Run the upgrade and return every rendered command, in order.
pub fn run(
    ctx: &Context,
    options: &UpgradeOptions,
    runner: &dyn CommandRunner,
) -> Result<Vec<String>> {
    let Context {
        project,
        manager,
        manifest,
        framework,
    } = ctx;

    sanitize::validate_version(options.version.as_str())?;
    let groups = [
        (classify(&manifest.dependencies, *framework), false),
        (classify(&manifest.dev_dependencies, *framework), true),
    ];
    for (packages, _) in &groups {
        sanitize::validate_package_names(packages)?;
    }

    ui::info(&format!(
        "Updating {} packages in \"{}\" to version \"{}\"",
        framework,
        project.manifest_path().display(),
        options.version
    ));

    let mut rendered = Vec::new();

    for (packages, dev) in &groups {
        let section = if *dev { "devDependencies" } else { "dependencies" };
        if packages.is_empty() {
            ui::info(&format!("No {} packages in {}, skipping", framework, section));
            continue;
        }

        let cmd = manager.install_command(&InstallRequest {
            packages,
            version: &options.version,
            dev: *dev,
            force: options.force,
        });
        let output = execute(runner, &cmd, options.dry_run)?;
        print_verbose(output.as_deref());
        rendered.push(cmd);
    }

    if options.no_sync {
        ui::info("Skipping lockfile sync (--no-sync)");
        return Ok(rendered);
    }

    let sync = manager.sync_command();
    if !options.dry_run {
        ui::info(&format!("Running '{}' to sync up all deps", sync));
    }
    let output = execute(runner, &sync, options.dry_run)?;
    print_verbose(output.as_deref());
    rendered.push(sync);

    if options.dry_run {
        ui::success("Dry run complete, nothing was executed");
    } else {
        ui::success(&format!("{} packages upgraded", framework));
    }
    Ok(rendered)
}

fn print_verbose(output: Option<&str>) {
    if let Some(text) = output
        && ui::is_verbose()
    {
        ui::output(text);
    }
}

#[cfg(test)]
mod tests;
