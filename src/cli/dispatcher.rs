//! Command dispatcher
//!
//! Resolves the project and package manager, then routes to the upgrade or
//! list-versions handler.

use crate::cli::args::Cli;
use crate::commands::{self, list_versions, upgrade};
use crate::core::project::ProjectDir;
use crate::core::types::TargetVersion;
use crate::error::Result;
use crate::packages::ManagerRegistry;
use crate::project_identity;
use crate::ui;
use crate::utils::platform::Platform;
use crate::utils::runner::ShellRunner;

/// Options parsed once from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub version: TargetVersion,
    pub dry_run: bool,
    pub force: bool,
    pub no_sync: bool,
    pub package_manager: Option<String>,
    pub list_versions: bool,
}

impl RunOptions {
    /// `--package-manager` wins over the environment variable.
    pub fn from_cli(args: &Cli, env_manager: Option<String>) -> Self {
        Self {
            version: TargetVersion::new(args.target.clone()),
            dry_run: args.dry_run,
            force: args.force,
            no_sync: args.no_sync,
            package_manager: args
                .package_manager
                .clone()
                .or(env_manager.filter(|name| !name.trim().is_empty())),
            list_versions: args.list_versions,
        }
    }

    pub fn upgrade_options(&self) -> upgrade::UpgradeOptions {
        upgrade::UpgradeOptions {
            version: self.version.clone(),
            dry_run: self.dry_run,
            force: self.force,
            no_sync: self.no_sync,
        }
    }
}

/// Dispatch the parsed CLI arguments
pub fn dispatch(args: &Cli) -> Result<()> {
    let env_manager = std::env::var(project_identity::package_manager_env_key()).ok();
    let options = RunOptions::from_cli(args, env_manager);

    let project = match &args.cwd {
        Some(dir) => ProjectDir::new(dir),
        None => ProjectDir::current()?,
    };
    let registry = ManagerRegistry::with_defaults(Platform::current());
    let ctx = commands::prepare(project, options.package_manager.as_deref(), &registry)?;

    let executes = options.list_versions || !options.dry_run;
    if executes && !ctx.manager.is_available() {
        ui::warning(&format!(
            "'{}' was not found on PATH; the commands below will likely fail",
            ctx.manager.program()
        ));
    }

    let runner = ShellRunner::new(ctx.project.root());
    if options.list_versions {
        list_versions::run(&ctx, &runner)?;
    } else {
        upgrade::run(&ctx, &options.upgrade_options(), &runner)?;
    }

    Ok(())
}
