//! Startup resolution of the filesystem strategy.
//!
//! The backend is chosen exactly once and injected into the components that
//! need it; call sites never re-detect the host mid-session.

use crate::service::FsCapability;

/// Resolve the filesystem strategy for this host.
///
/// Native hosts with a usable filesystem get `OsFs`; everything else falls
/// back to the in-memory hierarchy.
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_strategy() -> Box<dyn FsCapability> {
    if crate::os::OsFs::available() {
        tracing::info!(strategy = "os", "filesystem capability resolved");
        Box::new(crate::os::OsFs::new())
    } else {
        tracing::warn!("host filesystem unusable, falling back to in-memory hierarchy");
        Box::new(crate::memory::MemoryFs::new())
    }
}

/// Resolve the filesystem strategy for this host.
///
/// Browser builds have no filesystem bridge and always run virtual.
#[cfg(target_arch = "wasm32")]
pub fn resolve_strategy() -> Box<dyn FsCapability> {
    tracing::info!(strategy = "memory", "filesystem capability resolved");
    Box::new(crate::memory::MemoryFs::new())
}
