//! Nimbus Desktop Shell Core
//!
//! This crate provides the state machinery behind the simulated desktop:
//! - Window management (open, close, minimize, maximize, focus, z-order)
//! - Cross-component drag-and-drop with one process-wide drag session
//! - Desktop icon layer with grid snapping
//! - File-manager panel backed by an injected filesystem strategy
//! - Typed event bus decoupling the drag coordinator from the surfaces
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`) and chrome metrics
//! - [`window`]: Window lifecycle, frame interaction, region hit testing
//! - [`drag`]: Drag session state machine, threshold protocol, drop-target
//!   classification, and the hit-testing capability
//! - [`desktop`]: Icon grid and the desktop icon layer
//! - [`files`]: Directory-listing panel
//! - [`events`]: Publish/subscribe event bus
//! - [`persistence`]: State serialization for storage
//!
//! ## Example
//!
//! ```rust
//! use nimbus_shell::{ShellEngine, HitTester, Surface, Vec2};
//! use nimbus_vfs::MemoryFs;
//!
//! struct DesktopOnly;
//! impl HitTester for DesktopOnly {
//!     fn surface_at(&self, _point: Vec2) -> Surface {
//!         Surface::Desktop
//!     }
//! }
//!
//! let mut engine = ShellEngine::new(Box::new(MemoryFs::new()), Box::new(DesktopOnly));
//! engine.init(1920.0, 1080.0);
//! let window_id = engine.open_app("files").unwrap();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is testable without a
//!    browser; DOM access hides behind capability traits
//! 2. **Single Owner**: One engine instance owns all mutable shell state;
//!    no global singletons, so tests run isolated instances freely
//! 3. **No-op Over Panic**: Stale ids and out-of-state operations are
//!    silently ignored - event-ordering races are normal in UI code
//! 4. **Injected Strategies**: Filesystem and hit testing resolve once at
//!    startup and are passed in, never re-detected at call sites

pub mod desktop;
pub mod drag;
pub mod events;
pub mod files;
pub mod math;
pub mod persistence;
pub mod window;

mod engine;
mod error;
mod overlay;
mod registry;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use desktop::{DesktopIcon, GridLayout, IconConfig, IconId, IconLayer};
pub use drag::{
    classify, probe_surface, DragArm, DragCoordinator, DragData, DragSession, DragSource,
    DropTarget, HitTester, OverlayVisibility, Surface,
};
pub use events::{EventBus, ShellEvent, SubscriptionId};
pub use files::FilePanel;
pub use math::{Rect, Size, Vec2, ShellStyle, SHELL_STYLE};
pub use persistence::{PersistedWindow, Snapshot};
pub use window::{Window, WindowFrame, WindowId, WindowManager, WindowRegion};

pub use engine::{AssetResolver, InputResult, ShellEngine};
pub use error::{ShellError, ShellResult};
pub use overlay::DragOverlay;
pub use registry::{AppDefinition, AppRegistry};
