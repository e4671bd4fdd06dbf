use arcstr::ArcStr;

/* 📖 # Why is FilePath an opaque string?

Every adapter has its own idea of what a path looks like: a disk path, an entry name inside
an archive, an object key on a remote store. The facade forwards paths without looking at
them, so FilePath keeps the exact text it was built from. No separator conversion, no
normalization, no validation. ArcStr makes the clones that handles and recorded calls need
cheap.
*/

/// Opaque path handed to an adapter.
///
/// # Examples
///
/// ```
/// use unifs::FilePath;
///
/// let path = FilePath::from("/assets/../logo.png");
/// assert_eq!(path.as_str(), "/assets/../logo.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(ArcStr);

impl FilePath {
    /// The path text, exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(ArcStr::from(s))
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(ArcStr::from(s))
    }
}

impl From<ArcStr> for FilePath {
    fn from(s: ArcStr) -> Self {
        Self(s)
    }
}

impl From<&FilePath> for FilePath {
    fn from(p: &FilePath) -> Self {
        p.clone()
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
