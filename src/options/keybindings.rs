use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::CameraAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping camera actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<CameraAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, CameraAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (CameraAction::MoveForward, "KeyW".into()),
            (CameraAction::MoveBackward, "KeyS".into()),
            (CameraAction::StrafeLeft, "KeyA".into()),
            (CameraAction::StrafeRight, "KeyD".into()),
            (CameraAction::MoveUp, "Space".into()),
            (CameraAction::MoveDown, "KeyC".into()),
            (CameraAction::RotateLeft, "ArrowLeft".into()),
            (CameraAction::RotateRight, "ArrowRight".into()),
            (CameraAction::RotateUp, "ArrowUp".into()),
            (CameraAction::RotateDown, "ArrowDown".into()),
            (CameraAction::ResetCamera, "KeyR".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing whatever the key did before.
    pub fn bind(&mut self, action: CameraAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|_, bound| *bound != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraAction> {
        self.key_to_action.get(key).copied()
    }
}
