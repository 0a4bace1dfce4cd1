//! Keyboard shortcut resolution and dispatch.
//!
//! The view layer forwards raw key-down events here; [`resolve`] maps
//! them to named editor actions and says whether the platform default
//! should be prevented. While a text-input-like control has focus,
//! every binding is suppressed except chords carrying the command
//! modifier (Ctrl or Cmd) — plain Delete must delete text, not a frame,
//! but Cmd/Ctrl+A still selects all frames. Escape is never suppressed.
//!
//! [`ShortcutDispatcher`] layers optional handlers on top: dispatching
//! a combination with no registered handler is a quiet no-op, never a
//! failure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// KEYS AND EVENTS
// =============================================================================

/// Physical key of a key-down event, named the way the DOM names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key ("a", "=", ...).
    Char(char),
    Delete,
    Backspace,
    Escape,
    ArrowLeft,
    ArrowRight,
    Space,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value to a [`Key`].
    ///
    /// Returns None for keys the editor has no binding for.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Delete" => Some(Key::Delete),
            "Backspace" => Some(Key::Backspace),
            "Escape" => Some(Key::Escape),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            " " => Some(Key::Space),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// One key-down event as seen by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// Creates an unmodified key event.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// Builder: Set the Ctrl modifier.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Builder: Set the Meta (Cmd) modifier.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Builder: Set the Shift modifier.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// True when the platform command modifier is held (Ctrl or Cmd).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Named editor actions the keyboard can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutAction {
    SelectAll,
    DeleteSelection,
    Duplicate,
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    Escape,
    PreviousFrame,
    NextFrame,
    TogglePlayback,
}

impl ShortcutAction {
    /// Kebab-case name, as sent across the view boundary.
    pub fn name(&self) -> &'static str {
        match self {
            ShortcutAction::SelectAll => "select-all",
            ShortcutAction::DeleteSelection => "delete-selection",
            ShortcutAction::Duplicate => "duplicate",
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::ZoomIn => "zoom-in",
            ShortcutAction::ZoomOut => "zoom-out",
            ShortcutAction::Escape => "escape",
            ShortcutAction::PreviousFrame => "previous-frame",
            ShortcutAction::NextFrame => "next-frame",
            ShortcutAction::TogglePlayback => "toggle-playback",
        }
    }
}

/// Outcome of resolving one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub action: ShortcutAction,
    /// Whether the platform's default handling must be prevented.
    pub prevent_default: bool,
}

fn hit(action: ShortcutAction, prevent_default: bool) -> Option<Resolved> {
    Some(Resolved {
        action,
        prevent_default,
    })
}

/// Maps a key event to an editor action.
///
/// `typing` is true when the focused UI element is a text-input-like
/// control. Returns None for unbound combinations and suppressed
/// bindings.
pub fn resolve(event: &KeyEvent, typing: bool) -> Option<Resolved> {
    match event.key {
        // Escape always fires and leaves the platform default alone.
        Key::Escape => hit(ShortcutAction::Escape, false),

        // While typing, only command chords reach the editor.
        _ if typing && !event.command() => None,

        Key::Char(c) if event.command() => match c.to_ascii_lowercase() {
            'a' => hit(ShortcutAction::SelectAll, true),
            'd' => hit(ShortcutAction::Duplicate, true),
            'z' if event.shift => hit(ShortcutAction::Redo, true),
            'z' => hit(ShortcutAction::Undo, true),
            '=' | '+' => hit(ShortcutAction::ZoomIn, true),
            '-' | '_' => hit(ShortcutAction::ZoomOut, true),
            _ => None,
        },

        Key::Delete | Key::Backspace if !typing => hit(ShortcutAction::DeleteSelection, true),
        Key::ArrowLeft if !typing => hit(ShortcutAction::PreviousFrame, true),
        Key::ArrowRight if !typing => hit(ShortcutAction::NextFrame, true),
        Key::Space if !typing => hit(ShortcutAction::TogglePlayback, true),

        _ => None,
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

type Handler = Box<dyn FnMut()>;

/// What one dispatched key event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// The action the event resolved to, if any.
    pub action: Option<ShortcutAction>,
    /// Whether the caller must prevent the platform default.
    pub default_prevented: bool,
    /// Whether a registered handler ran.
    pub invoked: bool,
}

impl Dispatch {
    fn none() -> Self {
        Self {
            action: None,
            default_prevented: false,
            invoked: false,
        }
    }
}

/// Registry of optional per-action handlers.
///
/// Every handler is optional; a resolved action with no handler is
/// reported back but invokes nothing.
#[derive(Default)]
pub struct ShortcutDispatcher {
    handlers: HashMap<ShortcutAction, Handler>,
}

impl ShortcutDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the handler for one action.
    pub fn on<F>(&mut self, action: ShortcutAction, handler: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.handlers.insert(action, Box::new(handler));
        self
    }

    /// Resolves one key event and invokes at most one handler.
    pub fn dispatch(&mut self, event: &KeyEvent, typing: bool) -> Dispatch {
        let Some(resolved) = resolve(event, typing) else {
            return Dispatch::none();
        };
        let invoked = match self.handlers.get_mut(&resolved.action) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        };
        Dispatch {
            action: Some(resolved.action),
            default_prevented: resolved.prevent_default,
            invoked,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
