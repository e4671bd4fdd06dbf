use unifs_base::{UnifsError, UnifsResult};

use crate::adapter::{Adapter, AdapterHandle};
use crate::{AttributeSet, FilePath, Handle};

/* 📖 # Why does FileSystem do nothing but forward?

FileSystem is the single entry point callers program against. Whatever the backing medium,
the behavior of an operation (its return value, its error, whether it blocks) is the
adapter's. The facade adds no caching, locking, retries, logging or error translation, so
swapping adapters never changes semantics behind the caller's back. The one decision it
makes itself is the handle variant returned by `get`.
*/

/// Uniform front end over one storage [`Adapter`].
///
/// Cloning is cheap and clones share the adapter.
///
/// # Examples
///
/// ```
/// use unifs::{FilePath, FileSystem, Handle, MockAdapter};
///
/// let fs = FileSystem::new(MockAdapter::new());
/// assert!(fs.create_dir(&FilePath::from("/docs")));
/// assert!(fs.write(&FilePath::from("/docs/a.txt"), b"hello"));
///
/// match fs.get(&FilePath::from("/docs")).unwrap() {
///     Handle::Directory(dir) => assert_eq!(dir.path().as_str(), "/docs"),
///     Handle::File(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileSystem {
    adapter: AdapterHandle,
}

impl FileSystem {
    pub fn new(adapter: impl Adapter) -> Self {
        Self::from_handle(AdapterHandle::new(adapter))
    }

    /// Build a facade around an already shared adapter.
    pub fn from_handle(adapter: AdapterHandle) -> Self {
        Self { adapter }
    }

    /// Build a facade from an adapter that may be absent.
    ///
    /// Fails with `ErrorKind::MissingAdapter` when `adapter` is `None`.
    pub fn try_new(adapter: Option<AdapterHandle>) -> UnifsResult<Self> {
        adapter
            .map(Self::from_handle)
            .ok_or_else(|| Box::new(UnifsError::missing_adapter()))
    }

    pub fn adapter(&self) -> &AdapterHandle {
        &self.adapter
    }

    /// True if both facades are backed by the same adapter instance.
    pub fn same_adapter(&self, other: &FileSystem) -> bool {
        self.adapter.ptr_eq(&other.adapter)
    }

    /// Whether a file or directory exists at `path`.
    pub fn exists(&self, path: &FilePath) -> bool {
        self.adapter.has(path)
    }

    /// Write `contents` to `path`, overwriting any existing entry.
    pub fn write(&self, path: &FilePath, contents: &[u8]) -> bool {
        self.adapter.write(path, contents)
    }

    pub fn read(&self, path: &FilePath) -> UnifsResult<Vec<u8>> {
        self.adapter.read(path)
    }

    pub fn rename(&self, path: &FilePath, new_path: &FilePath) -> bool {
        self.adapter.rename(path, new_path)
    }

    /// Copy a file or directory into the directory `copy_path`.
    ///
    /// `copy_path` must not include the final file or directory name. This is not checked.
    pub fn copy(&self, path: &FilePath, copy_path: &FilePath) -> bool {
        self.adapter.copy(path, copy_path)
    }

    /// Delete a file, or a directory with everything below it.
    pub fn delete(&self, path: &FilePath) -> bool {
        self.adapter.delete(path)
    }

    /// Create a directory, including missing parents.
    pub fn create_dir(&self, path: &FilePath) -> bool {
        self.adapter.create_dir(path)
    }

    pub fn get_attributes(&self, path: &FilePath) -> UnifsResult<AttributeSet> {
        self.adapter.get_attributes(path)
    }

    /// Handle for the entry at `path`: a directory handle if the adapter reports the
    /// directory attribute, a file handle otherwise.
    ///
    /// Errors from `get_attributes` are returned as is.
    pub fn get(&self, path: &FilePath) -> UnifsResult<Handle> {
        let attributes = self.get_attributes(path)?;
        Ok(Handle::classify(self.clone(), path.clone(), attributes))
    }
}

impl From<AdapterHandle> for FileSystem {
    fn from(adapter: AdapterHandle) -> Self {
        Self::from_handle(adapter)
    }
}
