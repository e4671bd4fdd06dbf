/* 📖 # Why have unifs_base as a separate crate?
unifs_base holds the error type and the tracing bootstrap shared by every crate in the workspace.
Adapter implementations living in other crates depend only on this crate and the facade,
so they all report failures through the same `UnifsError`.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use ::tracing::{debug, error, info, instrument, trace, warn};
pub use error::{ErrorKind, ResultExt, UnifsError, UnifsResult};
