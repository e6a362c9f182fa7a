use super::*;

#[test]
fn build_shell_uses_platform_shell() {
    let cmd = build_shell_command("echo ok");
    let debug = format!("{:?}", cmd);
    #[cfg(unix)]
    assert!(debug.contains("\"sh\""));
    #[cfg(windows)]
    assert!(debug.contains("\"cmd\""));
    assert!(debug.contains("echo ok"));
}

#[test]
fn grep_program_follows_platform() {
    assert_eq!(Platform::unix().grep_program(), "grep");
    assert_eq!(Platform::windows().grep_program(), "findstr");
}

#[test]
fn current_platform_matches_target() {
    assert_eq!(Platform::current().windows, cfg!(windows));
}
