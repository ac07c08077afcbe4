use super::card::Card;
use super::hand::Hand;
use crate::error::Error;

/// two distinct cards. used for the hero's pocket and for hypothesized
/// opponent hands. the bitset representation makes the pair unordered,
/// so two Holes built from the same cards in either order compare equal.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(Error::InvalidInput(format!("hole needs 2 cards, got {}", n))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_pair() {
        let a = Card::try_from("7c").unwrap();
        let b = Card::try_from("2h").unwrap();
        assert_eq!(Hole::from((a, b)), Hole::from((b, a)));
    }

    #[test]
    fn exactly_two_cards() {
        assert!(Hole::try_from("7c 2h").is_ok());
        assert!(Hole::try_from("7c").is_err());
        assert!(Hole::try_from("7c 2h 5d").is_err());
    }
}
