use super::card::Card;
use crate::error::Error;

/// an unordered set of Cards stored as the 52 LSBs of a u64, one bit
/// per unique card. no heap, no duplicates representable, and the
/// unordered-pair key for opponent holes falls out for free.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(Hand::from(card)) != 0
    }
    pub fn disjoint(lhs: Self, rhs: Self) -> bool {
        lhs.0 & rhs.0 == 0
    }
    /// union of two sets known to be disjoint
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(Self::disjoint(lhs, rhs));
        Self(lhs.0 | rhs.0)
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(Hand::from(card));
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// single-card injection
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(1 << u8::from(card))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(Hand::from(c)))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str isomorphism over whitespace-separated cards, e.g. "Qd 9s 5c".
/// the same card appearing twice is a caller error, not a smaller set.
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Self::empty(), |hand, card| {
                let card = card?;
                if hand.contains(card) {
                    Err(Error::InvalidInput(format!("duplicate card: {}", card)))
                } else {
                    Ok(Self(hand.0 | u64::from(Hand::from(card))))
                }
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("As Kh 2d").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn reject_duplicates() {
        assert!(Hand::try_from("Qd Qd").is_err());
        assert!(Hand::try_from("Qd qD").is_err());
    }

    #[test]
    fn empty_from_empty_str() {
        assert_eq!(Hand::try_from("").unwrap(), Hand::empty());
    }

    #[test]
    fn disjoint_union() {
        let a = Hand::try_from("As Kh").unwrap();
        let b = Hand::try_from("2d 3c").unwrap();
        assert!(Hand::disjoint(a, b));
        assert_eq!(Hand::add(a, b).size(), 4);
    }
}
