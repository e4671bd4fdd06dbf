/* 📖 # What is an adapter?

An adapter binds the facade to one storage medium: local disk, an archive, a remote store or
memory. It implements eight primitives and nothing else. The facade holds exactly one
adapter for its whole life and forwards every call to it unchanged.
*/

pub mod mock;
mod traits;

pub use mock::{AdapterCall, MockAdapter};
pub use traits::{Adapter, AdapterHandle};
