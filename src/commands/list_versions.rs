//! List installed versions of the framework packages and the router-adjacent
//! packages next to them.

use super::Context;
use crate::core::framework::list_targets;
use crate::error::Result;
use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::sanitize;

/// Run one list command per target package and print what it reports.
pub fn run(ctx: &Context, runner: &dyn CommandRunner) -> Result<Vec<String>> {
    let targets = list_targets(&ctx.manifest, ctx.framework);
    sanitize::validate_package_names(&targets)?;

    ui::info(&format!(
        "Listing installed versions of {} {} packages",
        targets.len(),
        ctx.framework
    ));

    let mut rendered = Vec::with_capacity(targets.len());
    for package in &targets {
        let cmd = ctx.manager.list_command(package);
        ui::header(package);
        ui::command(&cmd, false);
        let output = runner.run(&cmd)?;
        ui::output(&output);
        rendered.push(cmd);
    }

    Ok(rendered)
}
