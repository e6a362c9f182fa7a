//! Shared rendering of install command lines
//!
//! Every manager describes its flags with an [`InstallFlags`] table and
//! renders through [`render_install`], so the pin, dev and force policies
//! live in one place.

use crate::core::types::TargetVersion;

/// What to install and how.
#[derive(Debug, Clone, Copy)]
pub struct InstallRequest<'a> {
    pub packages: &'a [String],
    pub version: &'a TargetVersion,
    pub dev: bool,
    pub force: bool,
}

impl InstallRequest<'_> {
    /// `name@version` for each package, space-joined. `None` when empty.
    pub fn package_specs(&self) -> Option<String> {
        if self.packages.is_empty() {
            return None;
        }
        let spec = self.version.install_spec();
        Some(
            self.packages
                .iter()
                .map(|name| format!("{}@{}", name, spec))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Manager-specific tokens of an install command.
#[derive(Debug, Clone, Copy)]
pub struct InstallFlags {
    pub program: &'static str,
    pub verb: &'static str,
    pub force: &'static str,
    /// Explicit production flag; `None` when the manager saves to
    /// `dependencies` by default.
    pub save_prod: Option<&'static str>,
    pub save_dev: &'static str,
    pub exact: &'static str,
}

pub fn render_install(flags: &InstallFlags, request: &InstallRequest<'_>) -> String {
    let specs = request.package_specs();
    let save = if request.dev {
        Some(flags.save_dev)
    } else {
        flags.save_prod
    };

    join_tokens([
        Some(flags.program),
        Some(flags.verb),
        request.force.then_some(flags.force),
        save,
        request.version.is_exact().then_some(flags.exact),
        specs.as_deref(),
    ])
}

/// Join the present tokens with single spaces.
pub fn join_tokens<'a>(tokens: impl IntoIterator<Item = Option<&'a str>>) -> String {
    tokens
        .into_iter()
        .flatten()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_tokens_skips_missing_and_empty() {
        assert_eq!(
            join_tokens([Some("npm"), None, Some(""), Some("ci")]),
            "npm ci"
        );
    }

    #[test]
    fn package_specs_use_stripped_version() {
        let packages = vec!["remix".to_string(), "@remix-run/node".to_string()];
        let version = TargetVersion::new("^2.0.0");
        let request = InstallRequest {
            packages: &packages,
            version: &version,
            dev: false,
            force: false,
        };
        assert_eq!(
            request.package_specs().as_deref(),
            Some("remix@2.0.0 @remix-run/node@2.0.0")
        );
    }

    #[test]
    fn empty_package_list_has_no_specs() {
        let version = TargetVersion::default();
        let request = InstallRequest {
            packages: &[],
            version: &version,
            dev: true,
            force: false,
        };
        assert_eq!(request.package_specs(), None);
    }
}
