use crate::error::{Result, UpgradeError};
use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::platform;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Runs commands through the platform shell inside the project root.
pub struct ShellRunner {
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        let output = platform::build_shell_command(command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| UpgradeError::SubprocessFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if ui::is_interrupted() {
            return Err(UpgradeError::Interrupted);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                detail => format!("exited with {}\n{}", output.status, detail),
            };
            return Err(UpgradeError::SubprocessFailed {
                command: command.to_string(),
                reason,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
