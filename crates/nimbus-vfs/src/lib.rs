//! Nimbus Filesystem Capability Layer
//!
//! The shell's file manager and desktop icon layer operate against an
//! abstract filesystem capability rather than a concrete backend:
//!
//! - **Types**: `DirEntry`, `EntryKind` for listing metadata
//! - **Path**: validation, normalization, and joining helpers
//! - **Service**: the `FsCapability` trait all strategies implement
//! - **Memory**: `MemoryFs`, a purely virtual hierarchy for hosts without
//!   filesystem access (and for tests)
//! - **Os**: `OsFs`, the host-backed strategy over `std::fs`
//! - **Strategy**: one-time startup resolution of real vs. virtual
//!
//! # Design Principles
//!
//! 1. **Hierarchical paths**: Unix-like `/path/to/file` semantics
//! 2. **Strategy, not probing**: the backend is chosen once at startup and
//!    injected; call sites never ask which host they run on
//! 3. **Overwrite-on-copy**: `copy` follows the underlying copy primitive
//!    and replaces an existing destination
//! 4. **No partial mutation**: every operation either completes or returns
//!    an error with the hierarchy unchanged

pub mod error;
pub mod memory;
pub mod path;
pub mod service;
pub mod strategy;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod os;

// Re-export main types
pub use error::FsError;
pub use memory::MemoryFs;
#[cfg(not(target_arch = "wasm32"))]
pub use os::OsFs;
pub use path::{filename, join_path, normalize_path, parent_path};
pub use service::{DialogOptions, FsCapability};
pub use strategy::resolve_strategy;
pub use types::{DirEntry, EntryKind};
