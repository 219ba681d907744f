//! Agent workspace on the local filesystem.
//!
//! Only the `memory` directory is read: markdown notes the agent keeps
//! between sessions.

pub mod memory;

pub use memory::{MemoryDir, MemoryFileEntry, RECENT_FILES_LIMIT};
