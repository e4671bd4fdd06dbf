use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, instrument};
use unifs_base::{UnifsError, UnifsResult};

use super::traits::Adapter;
use crate::{AttributeSet, FilePath};

/* 📖 # Why does MockAdapter record calls?

Most facade guarantees are about forwarding: the adapter sees exactly the arguments the
caller passed, bytes included, and the caller sees exactly what the adapter returned.
Recording every call lets a test check both sides without a second fake. Storage is an
in-memory map so the same mock also works for flows that need real state (write, then read).
*/

/// One recorded adapter invocation, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCall {
    Has(FilePath),
    Write(FilePath, Vec<u8>),
    Read(FilePath),
    Rename(FilePath, FilePath),
    Copy(FilePath, FilePath),
    Delete(FilePath),
    CreateDir(FilePath),
    GetAttributes(FilePath),
}

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<FilePath, Vec<u8>>,
    directories: HashSet<FilePath>,
    attributes: HashMap<FilePath, AttributeSet>,
    calls: Vec<AdapterCall>,
    read_only: bool,
}

/// In-memory adapter for tests.
///
/// Paths are split on `/` only to find parents and children; nothing is normalized. Clones
/// share the same storage and call log.
///
/// # Examples
///
/// ```
/// use unifs::{AdapterCall, FilePath, FileSystem, MockAdapter};
///
/// let mock = MockAdapter::new();
/// mock.add_file("/readme.md", b"hello".to_vec());
///
/// let fs = FileSystem::new(mock.clone());
/// assert_eq!(fs.read(&FilePath::from("/readme.md")).unwrap(), b"hello");
/// assert_eq!(mock.calls(), vec![AdapterCall::Read(FilePath::from("/readme.md"))]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAdapter {
    state: Arc<Mutex<MockState>>,
}

impl MockAdapter {
    /// Create a new empty MockAdapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories. Not recorded as a call.
    ///
    /// Returns `false` and stores nothing if the path is a directory or an ancestor is a file.
    pub fn add_file(&self, path: impl Into<FilePath>, content: Vec<u8>) -> bool {
        let path = path.into();
        let mut state = self.state.lock();
        if state.directories.contains(&path) || !state.create_parents(path.as_str()) {
            return false;
        }
        state.files.insert(path, content);
        true
    }

    /// Add a directory and its parents. Not recorded as a call.
    ///
    /// Returns `false` and stores nothing if the path or an ancestor is a file.
    pub fn add_directory(&self, path: impl Into<FilePath>) -> bool {
        let path = path.into();
        let mut state = self.state.lock();
        if state.files.contains_key(&path) || !state.create_parents(path.as_str()) {
            return false;
        }
        state.directories.insert(path);
        true
    }

    /// Report `attributes` for `path` regardless of what is stored there.
    pub fn set_attributes(&self, path: impl Into<FilePath>, attributes: AttributeSet) {
        self.state.lock().attributes.insert(path.into(), attributes);
    }

    /// When set, every mutating operation returns `false` and leaves storage untouched.
    pub fn set_read_only(&self, read_only: bool) {
        self.state.lock().read_only = read_only;
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<AdapterCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Stored contents of a file, if there is one at `path`.
    pub fn file_contents(&self, path: impl Into<FilePath>) -> Option<Vec<u8>> {
        self.state.lock().files.get(&path.into()).cloned()
    }

    pub fn is_directory(&self, path: impl Into<FilePath>) -> bool {
        self.state.lock().directories.contains(&path.into())
    }

    /// Paths of all stored files, sorted.
    pub fn file_paths(&self) -> Vec<FilePath> {
        let mut paths: Vec<_> = self.state.lock().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Record `call` and hand back the locked state for the operation itself.
    fn record(&self, call: AdapterCall) -> parking_lot::MutexGuard<'_, MockState> {
        let mut state = self.state.lock();
        state.calls.push(call);
        state
    }
}

impl MockState {
    /// Every stored file and directory strictly below `dir`.
    fn descendants(&self, dir: &FilePath) -> (Vec<FilePath>, Vec<FilePath>) {
        let files = self
            .files
            .keys()
            .filter(|p| is_within(p.as_str(), dir.as_str()))
            .cloned()
            .collect();
        let directories = self
            .directories
            .iter()
            .filter(|p| is_within(p.as_str(), dir.as_str()))
            .cloned()
            .collect();
        (files, directories)
    }

    /// Whether some ancestor of `path` is stored as a file.
    fn has_file_ancestor(&self, path: &str) -> bool {
        ancestors(path).any(|parent| self.files.contains_key(&FilePath::from(parent)))
    }

    /// Register every ancestor of `path` as a directory.
    ///
    /// Returns `false` without touching anything if an ancestor is a file.
    fn create_parents(&mut self, path: &str) -> bool {
        if self.has_file_ancestor(path) {
            return false;
        }
        for parent in ancestors(path) {
            self.directories.insert(FilePath::from(parent));
        }
        true
    }

    /// Move every attribute override at or below `from` to the same place below `to`.
    fn move_attributes(&mut self, from: &FilePath, to: &FilePath) {
        let moved: Vec<_> = self
            .attributes
            .keys()
            .filter(|p| *p == from || is_within(p.as_str(), from.as_str()))
            .cloned()
            .collect();
        for old in moved {
            if let Some(attrs) = self.attributes.remove(&old) {
                let new = FilePath::from(rebase(old.as_str(), from.as_str(), to.as_str()));
                self.attributes.insert(new, attrs);
            }
        }
    }
}

impl Adapter for MockAdapter {
    #[instrument(skip(self), fields(path = %path))]
    fn has(&self, path: &FilePath) -> bool {
        let state = self.record(AdapterCall::Has(path.clone()));
        let exists = state.files.contains_key(path) || state.directories.contains(path);
        debug!(exists, "checked existence");
        exists
    }

    #[instrument(skip(self, contents), fields(path = %path, len = contents.len()))]
    fn write(&self, path: &FilePath, contents: &[u8]) -> bool {
        let mut state = self.record(AdapterCall::Write(path.clone(), contents.to_vec()));
        if state.read_only
            || state.directories.contains(path)
            || !state.create_parents(path.as_str())
        {
            debug!("write refused");
            return false;
        }
        state.files.insert(path.clone(), contents.to_vec());
        debug!("file written");
        true
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read(&self, path: &FilePath) -> UnifsResult<Vec<u8>> {
        let state = self.record(AdapterCall::Read(path.clone()));
        let content = state.files.get(path).cloned().ok_or_else(|| {
            debug!("file not found");
            Box::new(UnifsError::file_error(
                path.as_str(),
                io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path)),
            ))
        })?;
        debug!(len = content.len(), "file read");
        Ok(content)
    }

    #[instrument(skip(self), fields(path = %path, new_path = %new_path))]
    fn rename(&self, path: &FilePath, new_path: &FilePath) -> bool {
        let mut state = self.record(AdapterCall::Rename(path.clone(), new_path.clone()));
        if state.read_only
            || state.files.contains_key(new_path)
            || state.directories.contains(new_path)
            || is_within(new_path.as_str(), path.as_str())
            || state.has_file_ancestor(new_path.as_str())
        {
            debug!("rename refused");
            return false;
        }

        if let Some(content) = state.files.remove(path) {
            state.create_parents(new_path.as_str());
            state.files.insert(new_path.clone(), content);
            state.move_attributes(path, new_path);
            debug!("file renamed");
            return true;
        }

        if !state.directories.contains(path) {
            debug!("nothing to rename");
            return false;
        }
        let (files, directories) = state.descendants(path);
        state.move_attributes(path, new_path);
        for file in files {
            let target = FilePath::from(rebase(file.as_str(), path.as_str(), new_path.as_str()));
            if let Some(content) = state.files.remove(&file) {
                state.files.insert(target, content);
            }
        }
        for dir in directories {
            state.directories.remove(&dir);
            state
                .directories
                .insert(FilePath::from(rebase(dir.as_str(), path.as_str(), new_path.as_str())));
        }
        state.directories.remove(path);
        state.create_parents(new_path.as_str());
        state.directories.insert(new_path.clone());
        debug!("directory renamed");
        true
    }

    #[instrument(skip(self), fields(path = %path, copy_path = %copy_path))]
    fn copy(&self, path: &FilePath, copy_path: &FilePath) -> bool {
        let mut state = self.record(AdapterCall::Copy(path.clone(), copy_path.clone()));
        if state.read_only {
            debug!("copy refused");
            return false;
        }
        let target = FilePath::from(join(copy_path.as_str(), last_segment(path.as_str())));
        if state.has_file_ancestor(target.as_str()) {
            debug!("copy refused");
            return false;
        }

        if let Some(content) = state.files.get(path).cloned() {
            if state.directories.contains(&target) {
                debug!("copy refused");
                return false;
            }
            state.create_parents(target.as_str());
            state.files.insert(target, content);
            debug!("file copied");
            return true;
        }

        if !state.directories.contains(path) {
            debug!("nothing to copy");
            return false;
        }
        if state.files.contains_key(&target) {
            debug!("copy refused");
            return false;
        }
        let (files, directories) = state.descendants(path);
        state.create_parents(target.as_str());
        state.directories.insert(target.clone());
        for dir in directories {
            state
                .directories
                .insert(FilePath::from(rebase(dir.as_str(), path.as_str(), target.as_str())));
        }
        for file in files {
            if let Some(content) = state.files.get(&file).cloned() {
                state.files.insert(
                    FilePath::from(rebase(file.as_str(), path.as_str(), target.as_str())),
                    content,
                );
            }
        }
        debug!("directory copied");
        true
    }

    #[instrument(skip(self), fields(path = %path))]
    fn delete(&self, path: &FilePath) -> bool {
        let mut state = self.record(AdapterCall::Delete(path.clone()));
        if state.read_only {
            debug!("delete refused");
            return false;
        }

        if state.files.remove(path).is_some() {
            state.attributes.remove(path);
            debug!("file deleted");
            return true;
        }

        if !state.directories.remove(path) {
            debug!("nothing to delete");
            return false;
        }
        let (files, directories) = state.descendants(path);
        for file in &files {
            state.files.remove(file);
            state.attributes.remove(file);
        }
        for dir in &directories {
            state.directories.remove(dir);
            state.attributes.remove(dir);
        }
        state.attributes.remove(path);
        debug!(
            files = files.len(),
            directories = directories.len(),
            "directory deleted"
        );
        true
    }

    #[instrument(skip(self), fields(path = %path))]
    fn create_dir(&self, path: &FilePath) -> bool {
        let mut state = self.record(AdapterCall::CreateDir(path.clone()));
        if state.read_only
            || state.files.contains_key(path)
            || !state.create_parents(path.as_str())
        {
            debug!("create_dir refused");
            return false;
        }
        state.directories.insert(path.clone());
        debug!("directory created");
        true
    }

    #[instrument(skip(self), fields(path = %path))]
    fn get_attributes(&self, path: &FilePath) -> UnifsResult<AttributeSet> {
        let state = self.record(AdapterCall::GetAttributes(path.clone()));
        if let Some(attrs) = state.attributes.get(path) {
            return Ok(*attrs);
        }
        if state.directories.contains(path) {
            Ok(AttributeSet::DIRECTORY)
        } else if state.files.contains_key(path) {
            Ok(AttributeSet::NORMAL)
        } else {
            debug!("entry not found");
            Err(Box::new(UnifsError::file_error(
                path.as_str(),
                io::Error::new(io::ErrorKind::NotFound, format!("No entry at: {}", path)),
            )))
        }
    }
}

/// Parent prefixes of `path`, nearest first. `"/a/b/c"` yields `"/a/b"` then `"/a"`.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut current = path.trim_end_matches('/');
    std::iter::from_fn(move || {
        let idx = current.rfind('/')?;
        current = &current[..idx];
        if current.is_empty() { None } else { Some(current) }
    })
}

fn is_within(path: &str, dir: &str) -> bool {
    let dir = dir.trim_end_matches('/');
    path.len() > dir.len() + 1 && path.starts_with(dir) && path.as_bytes()[dir.len()] == b'/'
}

fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Replace the `from` prefix of `path` with `to`.
fn rebase(path: &str, from: &str, to: &str) -> String {
    let from = from.trim_end_matches('/');
    format!("{}{}", to.trim_end_matches('/'), &path[from.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> FilePath {
        FilePath::from(s)
    }

    #[test]
    fn test_has_file_and_directory() {
        let mock = MockAdapter::new();
        mock.add_file("/docs/a.txt", b"a".to_vec());

        assert!(mock.has(&p("/docs/a.txt")));
        assert!(mock.has(&p("/docs")));
        assert!(!mock.has(&p("/docs/b.txt")));
    }

    #[test]
    fn test_write_then_read() {
        let mock = MockAdapter::new();
        assert!(mock.write(&p("new.txt"), b"test content"));
        assert_eq!(mock.read(&p("new.txt")).unwrap(), b"test content");
    }

    #[test]
    fn test_write_overwrites() {
        let mock = MockAdapter::new();
        mock.add_file("f", b"old".to_vec());
        assert!(mock.write(&p("f"), b"new"));
        assert_eq!(mock.file_contents("f"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_write_onto_directory_fails() {
        let mock = MockAdapter::new();
        mock.add_directory("/dir");
        assert!(!mock.write(&p("/dir"), b"x"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let mock = MockAdapter::new();

        assert!(mock.write(&p("/x/y.txt"), b"y"));
        assert!(mock.has(&p("/x")));
        assert!(mock.is_directory("/x"));
        assert!(mock.delete(&p("/x")));
        assert!(!mock.has(&p("/x/y.txt")));
        assert!(mock.file_paths().is_empty());
    }

    #[test]
    fn test_write_below_file_refused() {
        let mock = MockAdapter::new();
        mock.add_file("/a", b"a".to_vec());

        assert!(!mock.write(&p("/a/b"), b"b"));
        assert!(!mock.is_directory("/a"));
        assert_eq!(mock.file_paths(), vec![p("/a")]);
    }

    #[test]
    fn test_read_not_found() {
        let mock = MockAdapter::new();
        let err = mock.read(&p("nonexistent.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rename_file() {
        let mock = MockAdapter::new();
        mock.add_file("/a.txt", b"x".to_vec());

        assert!(mock.rename(&p("/a.txt"), &p("/sub/b.txt")));
        assert_eq!(mock.file_contents("/sub/b.txt"), Some(b"x".to_vec()));
        assert!(mock.file_contents("/a.txt").is_none());
        assert!(mock.is_directory("/sub"));
    }

    #[test]
    fn test_rename_directory_moves_children() {
        let mock = MockAdapter::new();
        mock.add_file("/src/a/one.rs", b"1".to_vec());
        mock.add_file("/src/two.rs", b"2".to_vec());

        assert!(mock.rename(&p("/src"), &p("/lib")));
        assert_eq!(mock.file_paths(), vec![p("/lib/a/one.rs"), p("/lib/two.rs")]);
        assert!(mock.is_directory("/lib/a"));
        assert!(!mock.is_directory("/src"));
        assert!(!mock.is_directory("/src/a"));
    }

    #[test]
    fn test_rename_directory_moves_attribute_overrides() {
        let mock = MockAdapter::new();
        mock.add_file("/src/a.txt", b"a".to_vec());
        mock.set_attributes("/src/a.txt", AttributeSet::HIDDEN);
        mock.set_attributes("/src", AttributeSet::DIRECTORY | AttributeSet::ARCHIVE);

        assert!(mock.rename(&p("/src"), &p("/lib")));
        assert!(mock.get_attributes(&p("/src/a.txt")).unwrap_err().is_not_found());
        assert!(mock.get_attributes(&p("/src")).unwrap_err().is_not_found());
        assert_eq!(
            mock.get_attributes(&p("/lib/a.txt")).unwrap(),
            AttributeSet::HIDDEN
        );
        assert_eq!(
            mock.get_attributes(&p("/lib")).unwrap(),
            AttributeSet::DIRECTORY | AttributeSet::ARCHIVE
        );
    }

    #[test]
    fn test_rename_into_own_subtree_refused() {
        let mock = MockAdapter::new();
        mock.add_file("/a/f", b"".to_vec());

        assert!(!mock.rename(&p("/a"), &p("/a/b")));
        assert_eq!(mock.file_paths(), vec![p("/a/f")]);
        assert!(mock.is_directory("/a"));
        assert!(!mock.is_directory("/a/b"));
    }

    #[test]
    fn test_rename_below_file_refused() {
        let mock = MockAdapter::new();
        mock.add_file("/a", b"".to_vec());
        mock.add_file("/b", b"".to_vec());

        assert!(!mock.rename(&p("/b"), &p("/a/b")));
        assert!(!mock.is_directory("/a"));
        assert_eq!(mock.file_paths(), vec![p("/a"), p("/b")]);
    }

    #[test]
    fn test_rename_missing_or_onto_existing() {
        let mock = MockAdapter::new();
        mock.add_file("/a", b"".to_vec());
        mock.add_file("/b", b"".to_vec());

        assert!(!mock.rename(&p("/missing"), &p("/c")));
        assert!(!mock.rename(&p("/a"), &p("/b")));
    }

    #[test]
    fn test_copy_file_into_directory() {
        let mock = MockAdapter::new();
        mock.add_file("/docs/readme.md", b"hi".to_vec());

        assert!(mock.copy(&p("/docs/readme.md"), &p("/backup")));
        assert_eq!(mock.file_contents("/backup/readme.md"), Some(b"hi".to_vec()));
        assert_eq!(mock.file_contents("/docs/readme.md"), Some(b"hi".to_vec()));
    }

    #[test]
    fn test_copy_directory_recursively() {
        let mock = MockAdapter::new();
        mock.add_file("/docs/a.md", b"a".to_vec());
        mock.add_file("/docs/img/b.png", b"b".to_vec());

        assert!(mock.copy(&p("/docs"), &p("/out/")));
        assert!(mock.is_directory("/out/docs/img"));
        assert_eq!(mock.file_contents("/out/docs/a.md"), Some(b"a".to_vec()));
        assert_eq!(mock.file_contents("/out/docs/img/b.png"), Some(b"b".to_vec()));
    }

    #[test]
    fn test_copy_missing_source() {
        let mock = MockAdapter::new();
        assert!(!mock.copy(&p("/nothing"), &p("/out")));
        assert!(mock.file_paths().is_empty());
    }

    #[test]
    fn test_delete_file_and_directory() {
        let mock = MockAdapter::new();
        mock.add_file("/keep.txt", b"".to_vec());
        mock.add_file("/tmp/a/b.txt", b"".to_vec());

        assert!(mock.delete(&p("/tmp")));
        assert!(!mock.has(&p("/tmp/a")));
        assert!(!mock.has(&p("/tmp/a/b.txt")));
        assert!(mock.delete(&p("/keep.txt")));
        assert!(!mock.delete(&p("/keep.txt")));
    }

    #[test]
    fn test_delete_does_not_touch_sibling_with_shared_prefix() {
        let mock = MockAdapter::new();
        mock.add_file("/tmp/x", b"".to_vec());
        mock.add_file("/tmp2/y", b"".to_vec());

        assert!(mock.delete(&p("/tmp")));
        assert!(mock.has(&p("/tmp2/y")));
    }

    #[test]
    fn test_create_dir_with_parents() {
        let mock = MockAdapter::new();
        assert!(mock.create_dir(&p("a/b/c")));
        assert!(mock.is_directory("a"));
        assert!(mock.is_directory("a/b"));
        assert!(mock.is_directory("a/b/c"));
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let mock = MockAdapter::new();
        mock.add_file("a", b"".to_vec());
        assert!(!mock.create_dir(&p("a")));
    }

    #[test]
    fn test_create_dir_below_file_fails() {
        let mock = MockAdapter::new();
        mock.add_file("/a", b"".to_vec());

        assert!(!mock.create_dir(&p("/a/b")));
        assert!(!mock.is_directory("/a"));
        assert!(!mock.has(&p("/a/b")));
        assert_eq!(mock.get_attributes(&p("/a")).unwrap(), AttributeSet::NORMAL);
    }

    #[test]
    fn test_copy_below_file_refused() {
        let mock = MockAdapter::new();
        mock.add_file("/f", b"".to_vec());
        mock.add_file("/x", b"x".to_vec());

        assert!(!mock.copy(&p("/x"), &p("/f")));
        assert!(!mock.is_directory("/f"));
        assert_eq!(mock.file_paths(), vec![p("/f"), p("/x")]);
    }

    #[test]
    fn test_seeding_refuses_file_directory_conflicts() {
        let mock = MockAdapter::new();
        assert!(mock.add_file("/a", b"".to_vec()));

        assert!(!mock.add_file("/a/b", b"".to_vec()));
        assert!(!mock.add_directory("/a"));
        assert!(!mock.add_directory("/a/c"));
        assert!(mock.add_directory("/d"));
        assert!(!mock.add_file("/d", b"".to_vec()));
        assert_eq!(mock.file_paths(), vec![p("/a")]);
    }

    #[test]
    fn test_get_attributes_defaults_and_override() {
        let mock = MockAdapter::new();
        mock.add_file("/f", b"".to_vec());
        mock.add_directory("/d");
        mock.set_attributes("/f", AttributeSet::HIDDEN | AttributeSet::ARCHIVE);

        assert_eq!(mock.get_attributes(&p("/d")).unwrap(), AttributeSet::DIRECTORY);
        assert_eq!(
            mock.get_attributes(&p("/f")).unwrap(),
            AttributeSet::HIDDEN | AttributeSet::ARCHIVE
        );
        assert!(mock.get_attributes(&p("/none")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_only_refuses_mutation() {
        let mock = MockAdapter::new();
        mock.add_file("/a", b"a".to_vec());
        mock.add_directory("/d");
        mock.set_read_only(true);

        assert!(!mock.write(&p("/a"), b"b"));
        assert!(!mock.rename(&p("/a"), &p("/b")));
        assert!(!mock.copy(&p("/a"), &p("/d")));
        assert!(!mock.delete(&p("/a")));
        assert!(!mock.create_dir(&p("/e")));
        assert_eq!(mock.file_paths(), vec![p("/a")]);
        assert_eq!(mock.file_contents("/a"), Some(b"a".to_vec()));
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let mock = MockAdapter::new();
        mock.has(&p("x"));
        mock.write(&p("x"), b"");
        let _ = mock.read(&p("x"));

        assert_eq!(
            mock.calls(),
            vec![
                AdapterCall::Has(p("x")),
                AdapterCall::Write(p("x"), vec![]),
                AdapterCall::Read(p("x")),
            ]
        );
        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let mock = MockAdapter::new();
        let clone = mock.clone();
        clone.add_file("shared", b"1".to_vec());
        assert!(mock.has(&p("shared")));
        assert_eq!(clone.calls().len(), 1);
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(ancestors("/a/b/c").collect::<Vec<_>>(), vec!["/a/b", "/a"]);
        assert_eq!(ancestors("a/b/").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(ancestors("a").count(), 0);
        assert!(is_within("/a/b", "/a"));
        assert!(is_within("/a/b", "/a/"));
        assert!(!is_within("/ab", "/a"));
        assert!(!is_within("/a", "/a"));
        assert_eq!(last_segment("/docs/readme.md"), "readme.md");
        assert_eq!(last_segment("/docs/"), "docs");
        assert_eq!(join("/out", "x"), "/out/x");
        assert_eq!(join("/out/", "x"), "/out/x");
        assert_eq!(join("", "x"), "x");
        assert_eq!(rebase("/src/a/b", "/src", "/lib"), "/lib/a/b");
    }
}
