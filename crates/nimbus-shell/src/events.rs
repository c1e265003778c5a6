//! Typed event bus decoupling the drag coordinator from the surfaces it
//! affects.
//!
//! The desktop icon layer and the file-manager panel never reference each
//! other; drop outcomes and failures are published here and observed by
//! whoever subscribed. Subscriptions are explicit handles so listener
//! cleanup across view remounts is visible in the code, not implied.

use crate::desktop::IconId;

/// Events published by the shell engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    /// A dragged entry was dropped onto the file-manager panel
    DropToFileManager {
        name: String,
        path: String,
        is_directory: bool,
    },

    /// A new desktop icon was created from a drop
    AddDesktopIcon {
        name: String,
        path: String,
        is_directory: bool,
        x: f32,
        y: f32,
    },

    /// An existing desktop icon moved to a new grid cell
    RepositionDesktopIcon { icon_id: IconId, x: f32, y: f32 },

    /// A filesystem-backed action failed; message is user-presentable
    OperationFailed { message: String },
}

/// Identifier for one subscription.
pub type SubscriptionId = u64;

type Handler = Box<dyn FnMut(&ShellEvent)>;

/// Publish/subscribe hub for [`ShellEvent`]s.
pub struct EventBus {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: SubscriptionId,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a handler. The returned id must be passed to
    /// [`EventBus::unsubscribe`] when the listener goes away.
    pub fn subscribe(&mut self, handler: impl FnMut(&ShellEvent) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _)| *sid != id);
        self.handlers.len() != before
    }

    /// Deliver an event to every live subscriber, in subscription order.
    pub fn publish(&mut self, event: &ShellEvent) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}
