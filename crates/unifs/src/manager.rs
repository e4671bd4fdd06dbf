use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, instrument};
use unifs_base::{ResultExt, UnifsResult};

use crate::FileSystem;
use crate::adapter::{Adapter, AdapterHandle};
use crate::config::FileSystemConfig;

/* 📖 # Why a manager on top of FileSystem?

An application usually talks to several storage media at once: assets from an archive, user
data on disk, a cache in memory. The manager keeps each adapter under a name ("disk") and
hands out facades for them, so code only needs to know a disk name. Resolving a name goes
through `FileSystem::try_new`, which makes an unknown disk the same error as a missing
adapter.
*/

/// Registry of named adapters.
#[derive(Debug)]
pub struct FileSystemManager {
    disks: RwLock<HashMap<String, AdapterHandle>>,
    default_disk: RwLock<String>,
}

impl FileSystemManager {
    pub fn new(config: FileSystemConfig) -> Self {
        Self {
            disks: RwLock::new(HashMap::new()),
            default_disk: RwLock::new(config.default_disk),
        }
    }

    /// Register `adapter` under `name`, replacing any adapter already registered there.
    pub fn extend(&self, name: impl Into<String>, adapter: impl Adapter) {
        self.extend_handle(name, AdapterHandle::new(adapter));
    }

    /// Register an already shared adapter under `name`.
    pub fn extend_handle(&self, name: impl Into<String>, adapter: AdapterHandle) {
        let name = name.into();
        let replaced = self.disks.write().insert(name.clone(), adapter).is_some();
        debug!(disk = %name, replaced, "registered disk");
    }

    /// Facade for the disk called `name`.
    #[instrument(skip(self))]
    pub fn disk(&self, name: &str) -> UnifsResult<FileSystem> {
        let adapter = self.disks.read().get(name).cloned();
        if adapter.is_none() {
            debug!("disk not registered");
        }
        FileSystem::try_new(adapter).with_context(|| format!("Failed to resolve disk '{}'", name))
    }

    /// Facade for the configured default disk.
    pub fn default_disk(&self) -> UnifsResult<FileSystem> {
        let name = self.default_disk_name();
        self.disk(&name)
    }

    pub fn set_default_disk(&self, name: impl Into<String>) {
        *self.default_disk.write() = name.into();
    }

    pub fn default_disk_name(&self) -> String {
        self.default_disk.read().clone()
    }

    /// Names of all registered disks, sorted.
    pub fn disk_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.disks.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FileSystemManager {
    fn default() -> Self {
        Self::new(FileSystemConfig::default())
    }
}
