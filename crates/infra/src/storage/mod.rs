//! Token and session-marker storage backends
//!
//! Implements the [`TokenStore`](pawtrack_core::TokenStore) and
//! [`SessionFlag`](pawtrack_core::SessionFlag) ports. The file store is the
//! production backend; the memory variants back tests and ephemeral
//! sessions.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::{MemorySessionFlag, MemoryTokenStore};
