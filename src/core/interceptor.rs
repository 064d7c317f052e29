//! # Key Interceptor
//!
//! The per-keystroke classifier. Given one key input, decide whether the
//! host's default handling should run, a substituted string should be
//! inserted, or the keystroke should be swallowed entirely.
//!
//! This is a pure function of the input — no state survives between
//! events, and nothing here knows about crossterm or the editor widget.
//! The TUI layer translates terminal events into [`KeyInput`] values and
//! applies the returned [`Decision`].

use crate::core::keymap::{self, Substitution};

/// One of the four navigation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

/// A keystroke as seen by the interceptor.
///
/// `Char` carries the character with modifiers already applied (so `Shift+q`
/// arrives as `'Q'`); `Arrow` is the key identity with modifiers stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Arrow(ArrowKey),
}

/// The outcome for one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Hand the event back to default handling: arrows move the cursor,
    /// printable characters self-insert.
    Forward,
    /// Insert this string at the cursor in place of the typed character.
    Insert(String),
    /// Consume the keystroke and insert nothing. This is a suppressed
    /// table slot, not a pass-through.
    Suppress,
}

/// Classify one keystroke.
///
/// Arrow keys are always forwarded, whatever modifiers were held. Letters,
/// symbols, and punctuation go through the keymap: a mapped slot becomes an
/// insertion, a suppressed slot swallows the keystroke, and a miss inserts
/// the original character (identity insertion). Everything else — digits,
/// space — is forwarded to default handling.
pub fn intercept(input: &KeyInput) -> Decision {
    match input {
        KeyInput::Arrow(_) => Decision::Forward,
        KeyInput::Char(c) => {
            if !is_mappable(*c) {
                return Decision::Forward;
            }
            match keymap::lookup(*c) {
                Some(Substitution::Glyph(g)) => Decision::Insert(g.to_string()),
                Some(Substitution::Suppressed) => Decision::Suppress,
                None => Decision::Insert(c.to_string()),
            }
        }
    }
}

/// Characters eligible for table lookup: letters and punctuation/symbols.
fn is_mappable(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_lowercase_key_inserts_glyph() {
        let d = intercept(&KeyInput::Char('q'));
        assert_eq!(d, Decision::Insert("ၸ".to_string()));
    }

    #[test]
    fn mapped_shifted_key_inserts_glyph() {
        let d = intercept(&KeyInput::Char('Q'));
        assert_eq!(d, Decision::Insert("ၹ".to_string()));
    }

    #[test]
    fn suppressed_slot_swallows_keystroke() {
        assert_eq!(intercept(&KeyInput::Char('T')), Decision::Suppress);
    }

    #[test]
    fn unmapped_punctuation_inserts_itself() {
        // '!' is punctuation but has no table slot: identity insertion,
        // not pass-through.
        assert_eq!(intercept(&KeyInput::Char('!')), Decision::Insert("!".to_string()));
    }

    #[test]
    fn digits_and_space_are_forwarded() {
        assert_eq!(intercept(&KeyInput::Char('5')), Decision::Forward);
        assert_eq!(intercept(&KeyInput::Char(' ')), Decision::Forward);
    }

    #[test]
    fn arrows_are_always_forwarded() {
        for arrow in [ArrowKey::Left, ArrowKey::Right, ArrowKey::Up, ArrowKey::Down] {
            assert_eq!(intercept(&KeyInput::Arrow(arrow)), Decision::Forward);
        }
    }

    #[test]
    fn classification_is_stateless() {
        // Same input, same decision, however many events came before.
        let first = intercept(&KeyInput::Char('s'));
        for c in ['a', 'T', '5', 's'] {
            intercept(&KeyInput::Char(c));
        }
        assert_eq!(intercept(&KeyInput::Char('s')), first);
    }
}
