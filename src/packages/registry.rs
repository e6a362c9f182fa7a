//! # Package Manager Registry
//!
//! Maps each [`ManagerKind`] to a factory producing its [`PackageManager`].
//!
//! ## Adding a New Manager
//!
//! 1. Create `src/packages/<manager>.rs` implementing `PackageManager`
//! 2. Add a `ManagerKind::<Name>` variant in `core/types.rs`, placed in
//!    `ManagerKind::ALL` according to its lockfile detection priority
//! 3. Register it in `ManagerRegistry::register_defaults()`

use crate::core::types::ManagerKind;
use crate::error::{Result, UpgradeError};
use crate::packages::PackageManager;
use crate::packages::bun::BunManager;
use crate::packages::npm::NpmManager;
use crate::packages::pnpm::PnpmManager;
use crate::packages::yarn::YarnManager;
use crate::utils::platform::Platform;
use std::collections::HashMap;

/// Factory function for creating package manager instances
pub type ManagerFactory = Box<dyn Fn(Platform) -> Box<dyn PackageManager> + Send + Sync>;

pub struct ManagerRegistry {
    factories: HashMap<ManagerKind, ManagerFactory>,
    platform: Platform,
}

impl ManagerRegistry {
    /// Create an empty registry
    pub fn new(platform: Platform) -> Self {
        Self {
            factories: HashMap::new(),
            platform,
        }
    }

    /// Registry holding every built-in manager.
    pub fn with_defaults(platform: Platform) -> Self {
        let mut registry = Self::new(platform);
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(ManagerKind::Npm, |_| Box::new(NpmManager));
        self.register(ManagerKind::Yarn, |_| Box::new(YarnManager));
        self.register(ManagerKind::Pnpm, |_| Box::new(PnpmManager));
        self.register(ManagerKind::Bun, |platform| Box::new(BunManager::new(platform)));
    }

    /// Register a manager with its factory function
    pub fn register<F>(&mut self, kind: ManagerKind, factory: F)
    where
        F: Fn(Platform) -> Box<dyn PackageManager> + Send + Sync + 'static,
    {
        self.factories.insert(kind, Box::new(factory));
    }

    pub fn create(&self, kind: ManagerKind) -> Result<Box<dyn PackageManager>> {
        self.factories
            .get(&kind)
            .map(|factory| factory(self.platform))
            .ok_or_else(|| UpgradeError::UnknownManager(kind.to_string()))
    }

    /// Registered managers in detection priority order.
    pub fn registered(&self) -> Vec<ManagerKind> {
        ManagerKind::ALL
            .into_iter()
            .filter(|kind| self.factories.contains_key(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests;
