//! Password alphabet.

use super::ClassSelection;

/// Ordered set of characters a password may be drawn from.
///
/// Built by concatenating the character sets of the enabled classes.
/// An alphabet may be empty; the orchestrator rejects empty alphabets
/// before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds the alphabet for a class selection.
    pub fn from_selection(selection: &ClassSelection) -> Self {
        let chars = selection
            .enabled()
            .flat_map(|class| class.chars().chars())
            .collect();
        Self { chars }
    }

    /// Builds an alphabet from an arbitrary string, preserving order.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Number of characters in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the alphabet has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Returns true if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Characters in order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl From<&ClassSelection> for Alphabet {
    fn from(selection: &ClassSelection) -> Self {
        Self::from_selection(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterClass;

    #[test]
    fn test_full_alphabet_size() {
        let alphabet = Alphabet::from_selection(&ClassSelection::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn test_concatenates_in_declaration_order() {
        let mut selection = ClassSelection::none();
        selection.set(CharacterClass::Numbers, true);
        selection.set(CharacterClass::Uppercase, true);

        let alphabet = Alphabet::from_selection(&selection);
        assert_eq!(alphabet.get(0), Some('A'));
        assert_eq!(alphabet.get(25), Some('Z'));
        assert_eq!(alphabet.get(26), Some('0'));
        assert_eq!(alphabet.len(), 36);
    }

    #[test]
    fn test_empty_selection_gives_empty_alphabet() {
        let alphabet = Alphabet::from_selection(&ClassSelection::none());
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.get(0), None);
    }
}
