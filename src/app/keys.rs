//! Abstract key events and the text buffer rule.
//!
//! A [`Key`] is either a literal character or a named [`ControlKey`]. Control
//! keys are never inserted into the text buffer as text; the distinction is
//! carried by the variant, not by any naming convention.

use crate::domain::{KeylistError, Result};
use std::fmt;
use std::str::FromStr;

/// Named keys that drive the state machine instead of typing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Display-only on the keyboard; no effect on the core.
    Shift,
    Backspace,
    /// Long-press on backspace: clears the whole buffer.
    LongPressBackspace,
    Space,
    /// Display-only on the keyboard; no effect on the core.
    NumToggle,
    /// Create an item, or commit the rename of the edited item.
    Save,
    /// Mark the edited or highlighted item done/undone.
    Toggle,
    /// Long-press on toggle: start or leave editing.
    Select,
    Delete,
    /// Quantity +1.
    Increase,
    /// Quantity -1, floored at 1.
    Decrease,
    /// Priority -1, floored at 0.
    PriorityMinus,
    /// Priority +1.
    PriorityPlus,
}

impl ControlKey {
    pub const ALL: [Self; 13] = [
        Self::Shift,
        Self::Backspace,
        Self::LongPressBackspace,
        Self::Space,
        Self::NumToggle,
        Self::Save,
        Self::Toggle,
        Self::Select,
        Self::Delete,
        Self::Increase,
        Self::Decrease,
        Self::PriorityMinus,
        Self::PriorityPlus,
    ];

    /// Kebab-case name used in scripts and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Backspace => "backspace",
            Self::LongPressBackspace => "long-press-backspace",
            Self::Space => "space",
            Self::NumToggle => "num-toggle",
            Self::Save => "save",
            Self::Toggle => "toggle",
            Self::Select => "select",
            Self::Delete => "delete",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::PriorityMinus => "priority-minus",
            Self::PriorityPlus => "priority-plus",
        }
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlKey {
    type Err = KeylistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KeylistError::Key(s.to_string()))
    }
}

/// One abstract key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Control(ControlKey),
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Character(c)
    }
}

impl From<ControlKey> for Key {
    fn from(key: ControlKey) -> Self {
        Self::Control(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(c) => write!(f, "{c}"),
            Self::Control(key) => write!(f, "{key}"),
        }
    }
}

/// Parses a single character as a character key and anything longer as a
/// control key name.
///
/// # Examples
///
/// ```
/// use keylist::app::{ControlKey, Key};
///
/// assert_eq!("Ñ".parse::<Key>()?, Key::Character('Ñ'));
/// assert_eq!("priority-plus".parse::<Key>()?, Key::Control(ControlKey::PriorityPlus));
/// assert!("launch".parse::<Key>().is_err());
/// # Ok::<(), keylist::KeylistError>(())
/// ```
impl FromStr for Key {
    type Err = KeylistError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Character(c)),
            (None, _) => Err(KeylistError::Key(String::new())),
            _ => s.parse().map(Self::Control),
        }
    }
}

/// Computes the text buffer after `key`.
///
/// Characters are appended, backspace drops the last character, space
/// appends one space, every other control key leaves the text alone. The
/// result is always left-trimmed and never right-trimmed.
///
/// # Examples
///
/// ```
/// use keylist::app::{apply_key_to_buffer, ControlKey, Key};
///
/// assert_eq!(apply_key_to_buffer("Mil", Key::Character('k')), "Milk");
/// assert_eq!(apply_key_to_buffer("", Key::Control(ControlKey::Space)), "");
/// assert_eq!(apply_key_to_buffer("Pan", Key::Control(ControlKey::Space)), "Pan ");
/// ```
#[must_use]
pub fn apply_key_to_buffer(buffer: &str, key: Key) -> String {
    let mut next = buffer.to_string();

    match key {
        Key::Character(c) => next.push(c),
        Key::Control(ControlKey::Backspace) => {
            next.pop();
        }
        Key::Control(ControlKey::Space) => next.push(' '),
        Key::Control(_) => {}
    }

    next.trim_start().to_string()
}
