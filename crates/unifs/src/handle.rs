use crate::{AttributeSet, FilePath, FileSystem};

/// Reference to a file reached through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct FileHandle {
    file_system: FileSystem,
    path: FilePath,
}

impl FileHandle {
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// The facade this handle was obtained from.
    pub fn file_system(&self) -> &FileSystem {
        &self.file_system
    }
}

/// Reference to a directory reached through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct DirectoryHandle {
    file_system: FileSystem,
    path: FilePath,
}

impl DirectoryHandle {
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// The facade this handle was obtained from.
    pub fn file_system(&self) -> &FileSystem {
        &self.file_system
    }
}

/// Result of [`FileSystem::get`].
#[derive(Debug, Clone)]
pub enum Handle {
    File(FileHandle),
    Directory(DirectoryHandle),
}

impl Handle {
    /// Pick the variant from `attributes`. Only the directory bit matters.
    pub(crate) fn classify(
        file_system: FileSystem,
        path: FilePath,
        attributes: AttributeSet,
    ) -> Self {
        if attributes.is_directory() {
            Handle::Directory(DirectoryHandle { file_system, path })
        } else {
            Handle::File(FileHandle { file_system, path })
        }
    }

    pub fn path(&self) -> &FilePath {
        match self {
            Handle::File(file) => file.path(),
            Handle::Directory(dir) => dir.path(),
        }
    }

    pub fn file_system(&self) -> &FileSystem {
        match self {
            Handle::File(file) => file.file_system(),
            Handle::Directory(dir) => dir.file_system(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Handle::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileHandle> {
        match self {
            Handle::File(file) => Some(file),
            Handle::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryHandle> {
        match self {
            Handle::Directory(dir) => Some(dir),
            Handle::File(_) => None,
        }
    }
}
