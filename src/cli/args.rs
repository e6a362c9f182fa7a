use crate::project_identity;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = project_identity::BINARY_NAME,
    about = "Upgrade Remix / React Router packages to a target version",
    long_about = "Upgrade the Remix or React Router packages listed in package.json to a target version, \
                  using the package manager that owns the project's lockfile, then re-sync the lockfile.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// Target version, dist-tag, or ^/~ range
    #[arg(value_name = "VERSION", default_value = project_identity::DEFAULT_TARGET_VERSION)]
    pub target: String,

    /// Print the commands without running them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Pass --force to the package manager's install command
    #[arg(short = 'f', long)]
    pub force: bool,

    /// List installed versions instead of upgrading
    #[arg(short = 'l', long)]
    pub list_versions: bool,

    /// Package manager to use instead of detecting it from the lockfile
    #[arg(
        short = 'p',
        long,
        value_name = "NAME",
        value_parser = ["npm", "yarn", "pnpm", "bun"]
    )]
    pub package_manager: Option<String>,

    /// Skip the lockfile sync after installing
    #[arg(short = 's', long)]
    pub no_sync: bool,

    /// Show the output of install and sync commands
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR", help_heading = "Advanced")]
    pub cwd: Option<PathBuf>,
}
