//! Lexique phonetic alphabet to IPA symbol table.
//!
//! The table is a plain value built once per run and passed by reference;
//! characters it does not know pass through [`SymbolMap::transliterate`]
//! unchanged.

use std::collections::HashMap;

/// Immutable character to symbol table.
#[derive(Debug, Clone)]
pub struct SymbolMap {
    table: HashMap<char, &'static str>,
}

impl SymbolMap {
    /// Build the default Lexique to IPA table.
    pub fn lexique() -> Self {
        Self::from_pairs(&[
            ('E', "ɛ"),
            ('e', "e"),
            // Either ɔ̃ or ɑ̃ depending on the word; one mapping is used.
            ('§', "ɔ̃"),
            ('@', "ɑ̃"),
            ('5', "ɛ̃"),
            ('Z', "ʒ"),
            ('R', "ʁ"),
            ('S', "ʃ"),
            ('2', "ø"),
            ('9', "œ"),
            ('1', "ə"),
            ('°', "ə"),
            ('O', "ɔ"),
        ])
    }

    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Self {
        Self {
            table: pairs.iter().copied().collect(),
        }
    }

    pub fn get(&self, c: char) -> Option<&'static str> {
        self.table.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Replace every mapped character of `phon`, leaving the rest as is.
    pub fn transliterate(&self, phon: &str) -> String {
        let mut out = String::with_capacity(phon.len() + phon.len() / 2);
        for c in phon.chars() {
            match self.get(c) {
                Some(sym) => out.push_str(sym),
                None => out.push(c),
            }
        }
        out
    }
}
