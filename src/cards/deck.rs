use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;

/// the 52-card universe minus an exclusion set.
///
/// always derived fresh from exclusions and copied per rollout, never
/// mutated in a shared place, so no state leaks between trials. canonical
/// order is the bitset order 2c 2d 2h 2s 3c .. As, which together with a
/// seeded rng makes every draw sequence reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Deck {
    pub fn full() -> Self {
        Self(Hand::from((1u64 << 52) - 1))
    }

    /// derive the deck left over after excluding the given cards.
    /// the same card excluded twice means the caller's state is
    /// inconsistent with the canonical deck.
    pub fn remaining(excluded: &[Card]) -> Result<Self> {
        let mut gone = Hand::empty();
        for &card in excluded {
            if gone.contains(card) {
                return Err(Error::InvalidState(format!("excluded twice: {}", card)));
            }
            gone = Hand::add(gone, Hand::from(card));
        }
        Ok(Self::full().without(gone))
    }

    /// the deck minus a further set of cards. cards not present are a no-op.
    pub fn without(self, cards: Hand) -> Self {
        Self(Hand::from(u64::from(self.0) & !u64::from(cards)))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// how many distinct unordered two-card combinations remain
    pub fn pairs(&self) -> usize {
        let n = self.size();
        n.saturating_sub(1) * n / 2
    }

    /// remove a uniformly random card
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<Card> {
        match self.size() {
            0 => None,
            n => {
                let i = rng.random_range(0..n);
                let card = self.0.into_iter().nth(i).expect("index within deck");
                self.0.remove(card);
                Some(card)
            }
        }
    }

    /// remove n uniformly random cards, e.g. the unknown board completion
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Result<Hand> {
        if self.size() < n {
            return Err(Error::InsufficientCards {
                need: n,
                have: self.size(),
            });
        }
        let mut dealt = Hand::empty();
        for _ in 0..n {
            let card = self.draw(rng).expect("size checked above");
            dealt = Hand::add(dealt, Hand::from(card));
        }
        Ok(dealt)
    }

    /// remove two cards to deal as a Hole
    pub fn hole(&mut self, rng: &mut impl Rng) -> Result<Hole> {
        Hole::try_from(self.deal(2, rng)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn full_deck_has_52() {
        assert_eq!(Deck::full().size(), 52);
    }

    #[test]
    fn remaining_subtracts() {
        let gone = Vec::<Card>::from(Hand::try_from("7c 2h Qd").unwrap());
        let deck = Deck::remaining(&gone).unwrap();
        assert_eq!(deck.size(), 49);
        for card in gone {
            assert!(!Hand::from(deck).contains(card));
        }
    }

    #[test]
    fn remaining_rejects_duplicate_exclusion() {
        let seven = Card::try_from("7c").unwrap();
        assert!(matches!(
            Deck::remaining(&[seven, seven]),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn draw_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::full();
        let mut seen = Hand::empty();
        while let Some(card) = deck.draw(rng) {
            assert!(!seen.contains(card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert_eq!(seen.size(), 52);
    }

    #[test]
    fn deal_checks_size() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::full().without(Hand::from((1u64 << 50) - 1));
        assert_eq!(deck.size(), 2);
        assert!(matches!(
            deck.deal(3, rng),
            Err(Error::InsufficientCards { need: 3, have: 2 })
        ));
    }

    #[test]
    fn seeded_draws_reproduce() {
        let a = Deck::full().deal(5, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = Deck::full().deal(5, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
