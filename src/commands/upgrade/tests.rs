use super::*;
use crate::commands::prepare;
use crate::commands::testing::{RecordingRunner, project};
use crate::core::project::ProjectDir;
use crate::error::UpgradeError;
use crate::packages::ManagerRegistry;
use crate::utils::platform::Platform;

fn context(dir: &tempfile::TempDir, manager_override: Option<&str>) -> Context {
    let registry = ManagerRegistry::with_defaults(Platform::unix());
    prepare(ProjectDir::new(dir.path()), manager_override, &registry).unwrap()
}

fn options(version: &str) -> UpgradeOptions {
    UpgradeOptions {
        version: TargetVersion::new(version),
        ..UpgradeOptions::default()
    }
}

#[test]
fn exact_version_with_npm() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.2.0", "@remix-run/router": "1.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::default();
    let rendered = run(&context(&dir, None), &options("2.0.0"), &runner).unwrap();

    assert_eq!(
        rendered,
        vec!["npm install --save --save-exact remix@2.0.0", "npm ci"]
    );
    assert_eq!(runner.calls(), rendered);
}

#[test]
fn caret_range_with_npm() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.2.0", "@remix-run/router": "1.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::default();
    let rendered = run(&context(&dir, None), &options("^2.0.0"), &runner).unwrap();
    assert_eq!(rendered[0], "npm install --save remix@2.0.0");
}

#[test]
fn dev_only_with_yarn_override() {
    let dir = project(
        r#"{"devDependencies": {"@remix-run/dev": "1.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::default();
    let rendered = run(&context(&dir, Some("yarn")), &options("latest"), &runner).unwrap();
    assert_eq!(
        rendered,
        vec![
            "yarn add --dev --exact @remix-run/dev@latest",
            "yarn install --frozen-lockfile"
        ]
    );
}

#[test]
fn prod_and_dev_groups_in_order() {
    let dir = project(
        r#"{
            "dependencies": {"@remix-run/react": "2.0.0", "@remix-run/node": "2.0.0", "react": "18.2.0"},
            "devDependencies": {"@remix-run/dev": "2.0.0", "@remix-run/v1-meta": "0.1.0"}
        }"#,
        &["pnpm-lock.yaml"],
    );
    let runner = RecordingRunner::default();
    let opts = UpgradeOptions {
        force: true,
        ..options("2.5.0")
    };
    let rendered = run(&context(&dir, None), &opts, &runner).unwrap();
    assert_eq!(
        rendered,
        vec![
            "pnpm add --force --save-exact @remix-run/react@2.5.0 @remix-run/node@2.5.0",
            "pnpm add --force --save-dev --save-exact @remix-run/dev@2.5.0",
            "pnpm install --frozen-lockfile",
        ]
    );
}

#[test]
fn dry_run_executes_nothing_and_renders_the_same() {
    let manifest = r#"{
        "dependencies": {"react-router": "7.0.0"},
        "devDependencies": {"@react-router/dev": "7.0.0"}
    }"#;
    let dir = project(manifest, &["bun.lockb"]);
    let ctx = context(&dir, None);

    let live_runner = RecordingRunner::default();
    let live = run(&ctx, &options("7.1.0"), &live_runner).unwrap();

    let dry_runner = RecordingRunner::default();
    let dry_opts = UpgradeOptions {
        dry_run: true,
        ..options("7.1.0")
    };
    let dry = run(&ctx, &dry_opts, &dry_runner).unwrap();

    assert!(dry_runner.calls().is_empty());
    assert_eq!(dry, live);
}

#[test]
fn no_sync_skips_sync() {
    let dir = project(r#"{"dependencies": {"remix": "1.0.0"}}"#, &["yarn.lock"]);
    let runner = RecordingRunner::default();
    let opts = UpgradeOptions {
        no_sync: true,
        ..options("2.0.0")
    };
    let rendered = run(&context(&dir, None), &opts, &runner).unwrap();
    assert_eq!(rendered, vec!["yarn add --exact remix@2.0.0"]);
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn force_false_never_renders_force() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.0.0"}, "devDependencies": {"@remix-run/dev": "1.0.0"}}"#,
        &[],
    );
    for manager in ["npm", "yarn", "pnpm", "bun"] {
        let runner = RecordingRunner::default();
        let rendered = run(&context(&dir, Some(manager)), &options("2.0.0"), &runner).unwrap();
        assert!(rendered.iter().all(|cmd| !cmd.contains("--force")));
    }
}

#[test]
fn failed_install_stops_remaining_steps() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.0.0"}, "devDependencies": {"@remix-run/dev": "1.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::failing_on("--save-dev");
    let result = run(&context(&dir, None), &options("2.0.0"), &runner);

    assert!(matches!(result, Err(UpgradeError::SubprocessFailed { .. })));
    assert_eq!(runner.calls().len(), 2);
    assert!(runner.calls().iter().all(|cmd| cmd != "npm ci"));
}

#[test]
fn unsafe_names_abort_before_any_command() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.0.0"}, "devDependencies": {"@remix-run/dev;rm": "1.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::default();
    let result = run(&context(&dir, None), &options("2.0.0"), &runner);

    assert!(matches!(result, Err(UpgradeError::InvalidPackageName(_))));
    assert!(runner.calls().is_empty());
}

#[test]
fn unsafe_version_aborts_before_any_command() {
    let dir = project(r#"{"dependencies": {"remix": "1.0.0"}}"#, &["package-lock.json"]);
    let runner = RecordingRunner::default();
    let result = run(&context(&dir, None), &options("2.0.0 && echo"), &runner);

    assert!(matches!(result, Err(UpgradeError::InvalidVersion(_))));
    assert!(runner.calls().is_empty());
}

#[test]
fn bare_operator_or_glob_version_is_rejected() {
    let dir = project(r#"{"dependencies": {"remix": "1.0.0"}}"#, &["package-lock.json"]);
    for version in ["^", "~", "*"] {
        let runner = RecordingRunner::default();
        let result = run(&context(&dir, None), &options(version), &runner);

        assert!(
            matches!(result, Err(UpgradeError::InvalidVersion(ref v)) if v == version),
            "{version} accepted: {result:?}"
        );
        assert!(runner.calls().is_empty());
    }
}

#[test]
fn empty_dev_group_is_skipped() {
    let dir = project(
        r#"{"dependencies": {"remix": "1.0.0"}, "devDependencies": {"typescript": "5.0.0"}}"#,
        &["package-lock.json"],
    );
    let runner = RecordingRunner::default();
    let rendered = run(&context(&dir, None), &options("2.0.0"), &runner).unwrap();

    assert_eq!(
        rendered,
        vec!["npm install --save --save-exact remix@2.0.0", "npm ci"]
    );
    assert_eq!(runner.calls().len(), 2);
}
