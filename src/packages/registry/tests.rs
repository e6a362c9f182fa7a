use super::*;

#[test]
fn defaults_cover_every_kind() {
    let registry = ManagerRegistry::with_defaults(Platform::unix());
    assert_eq!(registry.registered(), ManagerKind::ALL.to_vec());
    for kind in ManagerKind::ALL {
        assert_eq!(registry.create(kind).unwrap().kind(), kind);
    }
}

#[test]
fn empty_registry_rejects_creation() {
    let registry = ManagerRegistry::new(Platform::unix());
    assert!(registry.registered().is_empty());
    assert!(matches!(
        registry.create(ManagerKind::Npm),
        Err(UpgradeError::UnknownManager(_))
    ));
}

#[test]
fn platform_reaches_factories() {
    let registry = ManagerRegistry::with_defaults(Platform::windows());
    let bun = registry.create(ManagerKind::Bun).unwrap();
    assert!(bun.list_command("remix").contains("findstr"));
}

#[test]
fn lockfile_names_are_distinct() {
    let registry = ManagerRegistry::with_defaults(Platform::unix());
    let names: Vec<&str> = ManagerKind::ALL
        .into_iter()
        .map(|kind| registry.create(kind).unwrap().lock_file_name())
        .collect();
    assert_eq!(
        names,
        vec!["package-lock.json", "yarn.lock", "pnpm-lock.yaml", "bun.lockb"]
    );
}
