use std::process::Command;

/// Host facts that change how commands are rendered.
///
/// Passed explicitly to the builders that care instead of being checked
/// ad hoc where a command string is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub windows: bool,
}

impl Platform {
    pub fn current() -> Self {
        Self {
            windows: cfg!(windows),
        }
    }

    pub fn unix() -> Self {
        Self { windows: false }
    }

    pub fn windows() -> Self {
        Self { windows: true }
    }

    /// Line filter used to narrow a listing down to one package.
    pub fn grep_program(&self) -> &'static str {
        if self.windows { "findstr" } else { "grep" }
    }
}

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

#[cfg(test)]
mod tests;
