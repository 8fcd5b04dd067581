//! Fixed virtual keyboard layout and gesture resolution.
//!
//! The layout is what an on-screen keyboard shows; drawing it is up to the
//! caller. Gesture timing (how long a press must last to count as a
//! long-press) also stays outside: callers hand in an already classified
//! [`Gesture`] and get back the abstract [`Key`] the core should see, if any.

use super::keys::{ControlKey, Key};
use super::modes::SearchState;

/// Which bottom row the keyboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    Normal,
    /// Shown whenever the search state carries an item id.
    Edit,
}

impl KeyboardMode {
    #[must_use]
    pub fn for_state(state: Option<&SearchState>) -> Self {
        if state.is_some_and(|s| s.id.is_some()) {
            Self::Edit
        } else {
            Self::Normal
        }
    }
}

/// Already-classified pointer gesture on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Press,
    LongPress,
}

const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Keyboard rows, top to bottom, for the given mode.
///
/// # Examples
///
/// ```
/// use keylist::app::keyboard::{layout, KeyboardMode};
/// use keylist::app::{ControlKey, Key};
///
/// let rows = layout(KeyboardMode::Normal);
/// assert_eq!(rows[1][9], Key::Character('Ñ'));
/// assert_eq!(rows[4], vec![Key::Control(ControlKey::Save)]);
/// ```
#[must_use]
pub fn layout(mode: KeyboardMode) -> Vec<Vec<Key>> {
    use ControlKey::{
        Backspace, Decrease, Delete, Increase, NumToggle, PriorityMinus, PriorityPlus, Save,
        Shift, Space, Toggle,
    };

    let letters = |row: &str| row.chars().map(Key::Character).collect::<Vec<_>>();

    let mut third = vec![Key::Control(Shift)];
    third.extend(letters(LETTER_ROWS[2]));
    third.push(Key::Control(Backspace));

    let bottom = match mode {
        KeyboardMode::Normal => vec![Save],
        KeyboardMode::Edit => vec![Delete, Save, Decrease, Increase, PriorityMinus, PriorityPlus],
    };

    vec![
        letters(LETTER_ROWS[0]),
        letters(LETTER_ROWS[1]),
        third,
        vec![Key::Control(NumToggle), Key::Control(Space), Key::Control(Toggle)],
        bottom.into_iter().map(Key::Control).collect(),
    ]
}

/// Resolves a gesture on a physical key into the key event the state machine
/// receives.
///
/// - press on shift or num-toggle: nothing (display-only keys)
/// - long-press on backspace: [`ControlKey::LongPressBackspace`]
/// - long-press on toggle: [`ControlKey::Select`]
/// - long-press on anything else: nothing
/// - any other press: the key itself
#[must_use]
pub fn resolve(key: Key, gesture: Gesture) -> Option<Key> {
    match (gesture, key) {
        (Gesture::LongPress, Key::Control(ControlKey::Backspace)) => {
            Some(Key::Control(ControlKey::LongPressBackspace))
        }
        (Gesture::LongPress, Key::Control(ControlKey::Toggle)) => {
            Some(Key::Control(ControlKey::Select))
        }
        (Gesture::LongPress, _)
        | (Gesture::Press, Key::Control(ControlKey::Shift | ControlKey::NumToggle)) => None,
        (Gesture::Press, key) => Some(key),
    }
}
