//! Application registry
//!
//! Maps application identifiers to the definition the window manager needs
//! when launching them: default geometry, size constraints, and whether the
//! app is limited to a single concurrent window.

use std::collections::HashMap;

use crate::math::Size;

/// Static description of a launchable application.
#[derive(Clone, Debug)]
pub struct AppDefinition {
    /// Application identifier used for routing
    pub id: String,
    /// Display name
    pub name: String,
    /// Semantic icon key
    pub icon: String,
    /// Initial window size
    pub default_size: Size,
    /// Minimum window size
    pub min_size: Size,
    /// Maximum window size (None = no limit)
    pub max_size: Option<Size>,
    /// Opening the app again focuses the existing window instead of
    /// creating another
    pub single_instance: bool,
}

/// Registry of launchable applications.
pub struct AppRegistry {
    apps: HashMap<String, AppDefinition>,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            apps: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the bundled applications.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for def in builtin_apps() {
            registry.register(def);
        }
        registry
    }

    /// Register (or replace) an application definition.
    pub fn register(&mut self, def: AppDefinition) {
        self.apps.insert(def.id.clone(), def);
    }

    /// Look up an application by id.
    pub fn get(&self, id: &str) -> Option<&AppDefinition> {
        self.apps.get(id)
    }

    /// Iterate over all registered applications.
    pub fn all(&self) -> impl Iterator<Item = &AppDefinition> {
        self.apps.values()
    }

    /// Number of registered applications.
    pub fn count(&self) -> usize {
        self.apps.len()
    }
}

fn app(
    id: &str,
    name: &str,
    icon: &str,
    default_size: Size,
    min_size: Size,
    single_instance: bool,
) -> AppDefinition {
    AppDefinition {
        id: String::from(id),
        name: String::from(name),
        icon: String::from(icon),
        default_size,
        min_size,
        max_size: None,
        single_instance,
    }
}

/// The bundled application set.
fn builtin_apps() -> Vec<AppDefinition> {
    vec![
        app(
            "files",
            "Files",
            "folder",
            Size::new(900.0, 600.0),
            Size::new(400.0, 300.0),
            true,
        ),
        app(
            "notes",
            "Notes",
            "note",
            Size::new(700.0, 500.0),
            Size::new(300.0, 200.0),
            false,
        ),
        app(
            "terminal",
            "Terminal",
            "terminal",
            Size::new(800.0, 480.0),
            Size::new(320.0, 200.0),
            false,
        ),
        AppDefinition {
            id: String::from("calculator"),
            name: String::from("Calculator"),
            icon: String::from("calculator"),
            default_size: Size::new(320.0, 480.0),
            min_size: Size::new(320.0, 480.0),
            max_size: Some(Size::new(480.0, 720.0)),
            single_instance: true,
        },
        app(
            "settings",
            "Settings",
            "gear",
            Size::new(760.0, 540.0),
            Size::new(500.0, 400.0),
            true,
        ),
    ]
}
