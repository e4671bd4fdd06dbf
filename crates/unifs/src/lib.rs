/* 📖 # What is unifs?

unifs puts one interface, `FileSystem`, in front of any storage medium. A backend implements
the eight-method `Adapter` trait; callers only ever see the facade and the `Handle` values
it returns. `FileSystemManager` keeps several adapters under names when an application
needs more than one.
*/

pub mod adapter;
mod attributes;
pub mod config;
mod file_path;
mod file_system;
mod handle;
pub mod manager;

pub use adapter::{Adapter, AdapterCall, AdapterHandle, MockAdapter};
pub use attributes::AttributeSet;
pub use config::{FileSystemConfig, load_config, parse_config};
pub use file_path::FilePath;
pub use file_system::FileSystem;
pub use handle::{DirectoryHandle, FileHandle, Handle};
pub use manager::FileSystemManager;
