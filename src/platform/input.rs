//! Keyboard input adapter
//!
//! Key events arrive asynchronously; they only ever flip the named flags of a
//! [`TickInput`], which the frame loop reads once per tick.

use crate::settings::KeyBindings;
use crate::sim::TickInput;

/// Maps key identifiers onto [`TickInput`] flags
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    bindings: KeyBindings,
}

impl KeyboardAdapter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings: bindings.normalized(),
        }
    }

    /// Apply a key press (`pressed = true`) or release to `input`
    ///
    /// Key names are matched case-insensitively. Returns `false` for keys
    /// that are not bound, leaving `input` untouched.
    pub fn handle(&self, input: &mut TickInput, key: &str, pressed: bool) -> bool {
        let key = key.to_lowercase();
        if key == self.bindings.move_left {
            input.move_left = pressed;
            true
        } else if key == self.bindings.move_right {
            input.move_right = pressed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_press_and_release() {
        let adapter = KeyboardAdapter::default();
        let mut input = TickInput::default();

        assert!(adapter.handle(&mut input, "a", true));
        assert!(input.move_left && !input.move_right);

        assert!(adapter.handle(&mut input, "d", true));
        assert!(input.move_left && input.move_right);

        assert!(adapter.handle(&mut input, "a", false));
        assert!(!input.move_left && input.move_right);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let adapter = KeyboardAdapter::default();
        let mut input = TickInput::default();

        adapter.handle(&mut input, "D", true);
        assert!(input.move_right);
        adapter.handle(&mut input, "d", false);
        assert!(!input.move_right);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let adapter = KeyboardAdapter::default();
        let mut input = TickInput::default();

        assert!(!adapter.handle(&mut input, "Escape", true));
        assert!(!adapter.handle(&mut input, "w", true));
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_custom_bindings() {
        let adapter = KeyboardAdapter::new(KeyBindings {
            move_left: "ArrowLeft".to_string(),
            move_right: "ArrowRight".to_string(),
        });
        let mut input = TickInput::default();

        assert!(adapter.handle(&mut input, "ArrowLeft", true));
        assert!(input.move_left);
        assert!(!adapter.handle(&mut input, "a", true));
    }
}
