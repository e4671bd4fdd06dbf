use serde::Deserialize;
use unifs_base::{ResultExt, UnifsResult, err};

use crate::{FilePath, FileSystem};

/// Disk name used when the configuration does not choose one.
pub const DEFAULT_DISK: &str = "default";

/// Configuration for a [`FileSystemManager`](crate::FileSystemManager).
///
/// ```toml
/// default_disk = "assets"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileSystemConfig {
    /// Disk returned by `FileSystemManager::default_disk`.
    #[serde(default = "default_disk_name")]
    pub default_disk: String,
}

fn default_disk_name() -> String {
    DEFAULT_DISK.to_string()
}

impl Default for FileSystemConfig {
    fn default() -> Self {
        Self {
            default_disk: default_disk_name(),
        }
    }
}

/// Parse a configuration from TOML text.
pub fn parse_config(text: &str) -> UnifsResult<FileSystemConfig> {
    toml::from_str(text).map_err(|e| err!("Invalid file system config: {}", e))
}

/// Read and parse a TOML configuration file through `file_system`.
pub fn load_config(file_system: &FileSystem, path: &FilePath) -> UnifsResult<FileSystemConfig> {
    let bytes = file_system
        .read(path)
        .with_context(|| format!("Failed to read config {}", path))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| err!("Config file is not valid UTF-8: {}", e.utf8_error()))
        .with_context(|| format!("Failed to load config {}", path))?;
    parse_config(&text).with_context(|| format!("Failed to load config {}", path))
}
