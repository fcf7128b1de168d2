//! A finite multiset of rack tiles (spec §3 "Rack"), consumed
//! non-destructively during search: every branch of the search sees its own
//! decremented view (spec §4.E).
//!
//! Modeled on the teacher's `tilebag::TileBag`, which wraps the same
//! `multiset::HashMultiSet` for exactly this purpose.
use crate::codec::{Label, Letter, IS_BLANK};
use multiset::HashMultiSet;
use std::convert::TryFrom;

#[derive(Debug, Clone, Default)]
pub struct Rack(HashMultiSet<u8>);

impl Rack {
    pub fn new() -> Rack {
        Rack(HashMultiSet::new())
    }

    pub fn from_letters<I: IntoIterator<Item = Letter>>(letters: I) -> Rack {
        let mut bag = HashMultiSet::new();
        for letter in letters {
            bag.insert(letter.code());
        }
        Rack(bag)
    }

    /// Parse the letter pool grammar of spec §6: `a..z` (case-insensitive)
    /// contribute a letter tile, `*` contributes a blank.
    pub fn from_pool(pool: &str) -> Result<Rack, crate::Error> {
        let letters = pool
            .chars()
            .map(|c| Letter::try_from(c).map_err(|_| crate::Error::InvalidLetterPool(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rack::from_letters(letters))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_letter(&self, label: Label) -> bool {
        self.0.count_of(&label) > 0
    }

    pub fn has_blank(&self) -> bool {
        self.0.count_of(&IS_BLANK) > 0
    }

    /// Whether this rack can supply `label`, counting a blank as a
    /// substitute (spec §4.C invariant (iii)).
    pub fn can_supply(&self, label: Label) -> bool {
        self.has_letter(label) || self.has_blank()
    }

    /// Consume one direct occurrence of `label`, returning the decremented
    /// rack, or `None` if not present.
    pub fn take_letter(&self, label: Label) -> Option<Rack> {
        if !self.has_letter(label) {
            return None;
        }
        let mut next = self.0.clone();
        next.remove(&label);
        Some(Rack(next))
    }

    /// Consume one blank, returning the decremented rack, or `None` if no
    /// blank is present.
    pub fn take_blank(&self) -> Option<Rack> {
        if !self.has_blank() {
            return None;
        }
        let mut next = self.0.clone();
        next.remove(&IS_BLANK);
        Some(Rack(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pool() {
        let rack = Rack::from_pool("detoau*").unwrap();
        assert_eq!(rack.len(), 7);
        assert!(rack.has_blank());
    }

    #[test]
    fn test_from_pool_case_insensitive() {
        let rack = Rack::from_pool("CAT").unwrap();
        assert_eq!(rack.len(), 3);
    }

    #[test]
    fn test_from_pool_invalid() {
        assert!(Rack::from_pool("ca1").is_err());
    }

    #[test]
    fn test_take_letter_and_blank() {
        let rack = Rack::from_pool("cat*").unwrap();
        let c = crate::codec::encode_char('c').unwrap();
        let next = rack.take_letter(c).unwrap();
        assert_eq!(next.len(), 3);
        assert!(!next.has_letter(c));
        let next2 = next.take_blank().unwrap();
        assert_eq!(next2.len(), 2);
        assert!(!next2.has_blank());
    }

    #[test]
    fn test_can_supply_via_blank() {
        let rack = Rack::from_pool("*").unwrap();
        let q = crate::codec::encode_char('q').unwrap();
        assert!(rack.can_supply(q));
        assert!(!rack.has_letter(q));
    }

    #[test]
    fn test_take_missing_is_none() {
        let rack = Rack::from_pool("cat").unwrap();
        let z = crate::codec::encode_char('z').unwrap();
        assert!(rack.take_letter(z).is_none());
        assert!(rack.take_blank().is_none());
    }
}
