//! # Shan Keymap
//!
//! The static QWERTY → Shan substitution table. Two tiers (lowercase and
//! shifted) of 34 slots each, indexed positionally against the physical
//! key rows `qwertyuiop[]\asdfghjkl;'zxcvbnm,./` and their shifted
//! equivalents.
//!
//! Each slot is a tagged [`Substitution`] rather than a bare string, so
//! "this key produces nothing" (a suppressed slot) is distinct from "this
//! key has no entry at all" (`lookup` returns `None`). Collapsing the two
//! would silently turn the suppressed shifted slots into pass-through keys.
//!
//! The table is `const` data. It is never mutated and there is no per-user
//! customization layer.

/// Number of slots in each tier. Both key rows and both output tiers must
/// stay exactly this long or positional lookup is corrupt.
pub const ROW_LEN: usize = 34;

/// Latin source row for the lowercase tier, in physical key order.
const QWERTY_LOWER: &str = "qwertyuiop[]\\asdfghjkl;'zxcvbnm,./";

/// Latin source row for the shifted tier, in the same key order.
const QWERTY_UPPER: &str = "QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?";

/// The output of one table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Insert this string in place of the typed character. Usually a single
    /// Shan glyph, but a few shifted slots fall back to ASCII punctuation.
    Glyph(&'static str),
    /// Insert nothing at all. The keystroke is consumed, not passed through.
    Suppressed,
}

use Substitution::{Glyph, Suppressed};

/// Lowercase tier. Every slot maps to a glyph; none are suppressed.
const SHAN_LOWER: [Substitution; ROW_LEN] = [
    Glyph("ၸ"), // q
    Glyph("တ"), // w
    Glyph("ၼ"), // e
    Glyph("မ"), // r
    Glyph("ႄ"), // t
    Glyph("ပ"), // y
    Glyph("ၵ"), // u
    Glyph("င"), // i
    Glyph("သ"), // o
    Glyph("ၺ"), // p
    Glyph("ႁ"), // [
    Glyph("\""), // ]
    Glyph("ရ"), // \
    Glyph("ေ"), // a
    Glyph("ျ"), // s
    Glyph("ိ"), // d
    Glyph("်"), // f
    Glyph("ႂ"), // g
    Glyph("ႉ"), // h
    Glyph("ႈ"), // j
    Glyph("ု"), // k
    Glyph("ူ"), // l
    Glyph("း"), // ;
    Glyph("ႊ"), // '
    Glyph("ၽ"), // z
    Glyph("ထ"), // x
    Glyph("ၶ"), // c
    Glyph("လ"), // v
    Glyph("ႇ"), // b
    Glyph("ဢ"), // n
    Glyph("ၢ"), // m
    Glyph("ယ"), // ,
    Glyph("ွ"), // .
    Glyph("။"), // /
];

/// Shifted tier. Several slots are suppressed and a few fall back to
/// ASCII punctuation. These gaps are preserved exactly as shipped; they
/// are not "fixed" even where a glyph might seem to belong.
const SHAN_UPPER: [Substitution; ROW_LEN] = [
    Glyph("ၹ"),  // Q
    Glyph("ၻ"),  // W
    Glyph("ꧣ"),  // E
    Glyph("ၿ"),  // R
    Suppressed,   // T
    Glyph("ြ"),  // Y
    Glyph("ၷ"),  // U
    Suppressed,   // I
    Glyph("ဝ"),  // O
    Glyph("["),   // P
    Glyph("]"),   // {
    Glyph("”"),   // }
    Glyph("႟"),  // |
    Glyph("ဵ"),  // A
    Glyph("ှ"),  // S
    Glyph("ီ"),  // D
    Glyph("ႅ"),  // F
    Glyph("…"),   // G
    Glyph("ံ"),  // H
    Suppressed,   // J
    Suppressed,   // K
    Suppressed,   // L
    Suppressed,   // :
    Glyph("႞"),  // "
    Glyph("ၾ"),  // Z
    Glyph("ꩪ"),  // X
    Glyph("ꧠ"),  // C
    Glyph("ꩮ"),  // V
    Glyph("ႆ"),  // B
    Suppressed,   // N
    Glyph("ႃ"),  // M
    Suppressed,   // <
    Glyph("?"),   // >
    Glyph("၊"),  // ?
];

/// Look up the substitution for one typed character.
///
/// The tier is implied by the character itself: a character found in the
/// lowercase row resolves against the lowercase tier, a character found in
/// the shifted row against the shifted tier. No case folding happens here.
///
/// Returns `None` when the character appears in neither row (digits, space,
/// punctuation outside the rows) — the caller should insert the original
/// character unchanged.
pub fn lookup(c: char) -> Option<Substitution> {
    if let Some(i) = QWERTY_LOWER.chars().position(|k| k == c) {
        return Some(SHAN_LOWER[i]);
    }
    QWERTY_UPPER.chars().position(|k| k == c).map(|i| SHAN_UPPER[i])
}
