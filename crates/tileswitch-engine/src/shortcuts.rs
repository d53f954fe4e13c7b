//! Keyboard shortcuts.
//!
//! `modifier+F1..F12` picks a stream by position, `modifier+ArrowRight/Left`
//! cycles, `modifier+S` swaps to the partner of the focused stream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Highest function key that maps to a stream index.
const MAX_FUNCTION_KEY: usize = 12;

/// Modifier set that must be held for a shortcut to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutModifier {
    #[default]
    Alt,
    Ctrl,
    #[serde(rename = "ctrl+shift")]
    CtrlShift,
    Meta,
}

impl ShortcutModifier {
    /// Whether the chord holds exactly this modifier set.
    pub fn matches(self, chord: &KeyChord) -> bool {
        let wanted = match self {
            Self::Alt => (true, false, false, false),
            Self::Ctrl => (false, true, false, false),
            Self::CtrlShift => (false, true, true, false),
            Self::Meta => (false, false, false, true),
        };
        (chord.alt, chord.ctrl, chord.shift, chord.meta) == wanted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alt => "alt",
            Self::Ctrl => "ctrl",
            Self::CtrlShift => "ctrl+shift",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for ShortcutModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alt" => Ok(Self::Alt),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "ctrl+shift" | "control+shift" => Ok(Self::CtrlShift),
            "meta" | "cmd" => Ok(Self::Meta),
            other => Err(format!("unknown shortcut modifier: {}", other)),
        }
    }
}

/// A key press as reported by the page's `keydown` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: String,
    #[serde(default, rename = "altKey")]
    pub alt: bool,
    #[serde(default, rename = "ctrlKey")]
    pub ctrl: bool,
    #[serde(default, rename = "shiftKey")]
    pub shift: bool,
    #[serde(default, rename = "metaKey")]
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// What a shortcut asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShortcutAction {
    SwitchIndex { index: usize },
    Next,
    Previous,
    SwapFocused,
}

/// Resolves key chords into engine actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutMap {
    modifier: ShortcutModifier,
}

impl ShortcutMap {
    pub fn new(modifier: ShortcutModifier) -> Self {
        Self { modifier }
    }

    pub fn modifier(&self) -> ShortcutModifier {
        self.modifier
    }

    pub fn resolve(&self, chord: &KeyChord) -> Option<ShortcutAction> {
        if !self.modifier.matches(chord) {
            return None;
        }

        match chord.key.as_str() {
            "ArrowRight" => Some(ShortcutAction::Next),
            "ArrowLeft" => Some(ShortcutAction::Previous),
            "s" | "S" => Some(ShortcutAction::SwapFocused),
            key => function_key(key).map(|n| ShortcutAction::SwitchIndex { index: n - 1 }),
        }
    }
}

fn function_key(key: &str) -> Option<usize> {
    let n: usize = key.strip_prefix('F')?.parse().ok()?;
    (1..=MAX_FUNCTION_KEY).contains(&n).then_some(n)
}
