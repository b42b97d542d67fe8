//! Game settings and preferences
//!
//! Persisted in LocalStorage. Missing fields fall back to their defaults so an
//! older save keeps working after a field is added.

use serde::{Deserialize, Serialize};

use crate::sim::Bounds;

/// Keys that drive the paddle, stored lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: "a".to_string(),
            move_right: "d".to_string(),
        }
    }
}

impl KeyBindings {
    /// Lower-case both bindings so they compare against normalized key names
    pub fn normalized(self) -> Self {
        Self {
            move_left: self.move_left.to_lowercase(),
            move_right: self.move_right.to_lowercase(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Paddle key bindings
    pub keys: KeyBindings,

    // === Colors (any CSS color) ===
    pub paddle_color: String,
    pub ball_color: String,

    // === Canvas sizing ===
    /// Subtracted from the viewport width to avoid a scrollbar
    pub margin_width: f64,
    /// Subtracted from the viewport height to avoid a scrollbar
    pub margin_height: f64,

    // === Timing ===
    /// Longest frame delta fed to the simulation (ms)
    pub max_frame_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),

            paddle_color: "red".to_string(),
            ball_color: "blue".to_string(),

            margin_width: 1.0,
            margin_height: 4.0,

            max_frame_ms: 100.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "gravity_dodge_settings";

    /// Parse settings JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Settings for a stored value; missing or unreadable JSON gives the defaults
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded stored settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Canvas size for a viewport of `inner_width` x `inner_height`
    pub fn canvas_bounds(&self, inner_width: f64, inner_height: f64) -> Bounds {
        Bounds::new(
            (inner_width - self.margin_width).max(0.0).floor(),
            (inner_height - self.margin_height).max(0.0).floor(),
        )
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Raw JSON stored in LocalStorage, if any (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn stored_json() -> Option<String> {
        Self::storage()?.get_item(Self::STORAGE_KEY).ok().flatten()
    }

    /// Whether LocalStorage holds a settings entry (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn has_saved() -> bool {
        Self::stored_json().is_some()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_stored(Self::stored_json().as_deref())
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("Settings not saved: no LocalStorage");
            return;
        };

        match self.to_json() {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Settings not saved: {:?}", e),
            },
            Err(e) => log::warn!("Settings not saved: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn has_saved() -> bool {
        false
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_stored(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
