//! Character class definitions and selection state.

use serde::{Deserialize, Serialize};

/// A named group of characters eligible for inclusion in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// `A` through `Z`.
    Uppercase,
    /// `a` through `z`.
    Lowercase,
    /// `0` through `9`.
    Numbers,
    /// Punctuation and symbols.
    Special,
}

impl CharacterClass {
    /// All classes in declaration order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    /// Returns the characters belonging to this class.
    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Special => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Returns the lowercase class name.
    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Special => "special",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Enabled state of every character class.
///
/// Defaults to all classes enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSelection {
    /// `A` through `Z`.
    pub uppercase: bool,
    /// `a` through `z`.
    pub lowercase: bool,
    /// Digits.
    pub numbers: bool,
    /// Punctuation and symbols.
    pub special: bool,
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}

impl ClassSelection {
    /// A selection with every class disabled.
    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        }
    }

    /// A selection with exactly one class enabled.
    pub fn only(class: CharacterClass) -> Self {
        let mut selection = Self::none();
        selection.set(class, true);
        selection
    }

    /// Returns whether `class` is enabled.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Special => self.special,
        }
    }

    /// Enables or disables `class`.
    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Numbers => self.numbers = enabled,
            CharacterClass::Special => self.special = enabled,
        }
    }

    /// Flips `class` and returns its new state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.is_enabled(class);
        self.set(class, enabled);
        enabled
    }

    /// Enabled classes in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Returns true if no class is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}
