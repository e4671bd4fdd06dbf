use std::sync::Arc;

use unifs_base::UnifsResult;

use crate::{AttributeSet, FilePath};

/// Storage primitives a backend implements to be mounted behind a [`FileSystem`].
///
/// Boolean results report success; the trait carries no failure detail for them. `read` and
/// `get_attributes` return the adapter's own error, which reaches the caller unmodified.
/// What happens on a missing path is up to the implementation.
///
/// Implementations must be thread-safe: one facade may be used from several threads, and the
/// facade adds no locking of its own.
///
/// [`FileSystem`]: crate::FileSystem
pub trait Adapter: std::fmt::Debug + Send + Sync + 'static {
    /// Whether a file or directory exists at `path`.
    fn has(&self, path: &FilePath) -> bool;

    /// Write `contents` to `path`, replacing any existing entry.
    fn write(&self, path: &FilePath, contents: &[u8]) -> bool;

    /// Read the whole file at `path`.
    fn read(&self, path: &FilePath) -> UnifsResult<Vec<u8>>;

    /// Move the entry at `path` to `new_path`.
    fn rename(&self, path: &FilePath, new_path: &FilePath) -> bool;

    /// Copy the file or directory at `path` into the directory `copy_path`.
    ///
    /// `copy_path` names the destination directory only; the copy keeps the source's name.
    fn copy(&self, path: &FilePath, copy_path: &FilePath) -> bool;

    /// Remove the entry at `path`, recursively for directories.
    fn delete(&self, path: &FilePath) -> bool;

    /// Create the directory at `path` together with any missing parents.
    fn create_dir(&self, path: &FilePath) -> bool;

    /// Attributes of the entry at `path`.
    fn get_attributes(&self, path: &FilePath) -> UnifsResult<AttributeSet>;
}

/* 📖 # Why use Arc<dyn Adapter> with AdapterHandle?

Handles returned by `FileSystem::get` keep a reference back to their facade, and facades are
handed out repeatedly by the manager. Sharing the adapter through an Arc keeps all of those
cheap to clone and free of lifetime parameters.
*/

/// Shared handle to an adapter.
#[derive(Debug, Clone)]
pub struct AdapterHandle(Arc<dyn Adapter>);

impl AdapterHandle {
    pub fn new(adapter: impl Adapter) -> Self {
        Self(Arc::new(adapter))
    }

    /// True if both handles point to the same adapter instance.
    pub fn ptr_eq(&self, other: &AdapterHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Arc<dyn Adapter>> for AdapterHandle {
    fn from(adapter: Arc<dyn Adapter>) -> Self {
        Self(adapter)
    }
}

impl std::ops::Deref for AdapterHandle {
    type Target = dyn Adapter;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
