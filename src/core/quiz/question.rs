//=========================================================================
// Question Types
//=========================================================================
//
// Immutable question records and the three option keys.
//
// A question is loaded once from the CSV source and never mutated. The
// option key is the only vocabulary shared between the data file, the
// hit-test layout, and the quiz state machine.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== OptionKey ===========================================================

/// Identifies one of the three answer choices.
///
/// Parsed case-insensitively from the data file (`a`, `B`, ` c `) and
/// displayed upper-case on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    A,
    B,
    C,
}

impl OptionKey {
    /// All keys in presentation order (left to right on screen).
    pub const ALL: [OptionKey; 3] = [OptionKey::A, OptionKey::B, OptionKey::C];

    /// Parses a key from its textual form, ignoring case and whitespace.
    ///
    /// Returns `None` for anything other than a single `a`, `b` or `c`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    /// Upper-case label used on buttons and in feedback messages.
    pub fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }

    /// Position of this key within [`OptionKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//=== Question ============================================================

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Identifier from the data file (informational only).
    pub id: String,

    /// Prompt text shown above the option buttons.
    pub prompt: String,

    /// Option texts, indexed by [`OptionKey::index`].
    pub options: [String; 3],

    /// The key that scores a point.
    pub correct: OptionKey,
}

impl Question {
    /// Returns the text of the given option.
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    /// Returns `true` if `key` is the correct answer.
    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
