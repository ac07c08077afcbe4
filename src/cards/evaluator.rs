use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::error::Error;
use crate::error::Result;

/// A-2-3-4-5, the only straight where the Ace plays low
const WHEEL: u16 = 0b_1000000001111;

/// exhaustive evaluator: the strongest five-card hand over every
/// 5-subset of the input. a 7-card hand examines C(7,5) = 21 subsets.
/// deterministic and pure.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Result<Strength> {
        match self.0.size() {
            n if n < 5 => Err(Error::InvalidInput(format!(
                "evaluation needs at least 5 cards, got {}",
                n
            ))),
            _ => Ok(Subsets::from(self.0)
                .map(|five| Self::classify(&five))
                .max()
                .expect("at least one 5-card subset")),
        }
    }

    /// category + tie-breaks for exactly five cards
    fn classify(five: &[Card; 5]) -> Strength {
        let ranks = five.iter().map(|c| u16::from(c.rank())).fold(0, |a, b| a | b);
        let flush = five.iter().all(|c| c.suit() == five[0].suit());
        let groups = Self::groups(five);
        let kicks = |skip: usize| {
            Kickers::from(
                groups
                    .iter()
                    .skip(skip)
                    .map(|&(_, rank)| rank)
                    .collect::<Vec<Rank>>(),
            )
        };
        // a straight or flush holds five distinct ranks, so the two
        // families of categories never overlap within one subset
        match (Self::straight_high(ranks), flush) {
            (Some(Rank::Ace), true) => Strength::from(Ranking::RoyalFlush),
            (Some(high), true) => Strength::from(Ranking::StraightFlush(high)),
            (None, true) => Strength::from((Ranking::Flush(groups[0].1), kicks(1))),
            (Some(high), false) => Strength::from(Ranking::Straight(high)),
            (None, false) => match (groups[0], groups.get(1).copied()) {
                ((4, r), _) => Strength::from((Ranking::FourOAK(r), kicks(1))),
                ((3, r), Some((2, s))) => Strength::from(Ranking::FullHouse(r, s)),
                ((3, r), _) => Strength::from((Ranking::ThreeOAK(r), kicks(1))),
                ((2, r), Some((2, s))) => Strength::from((Ranking::TwoPair(r, s), kicks(2))),
                ((2, r), _) => Strength::from((Ranking::OnePair(r), kicks(1))),
                ((_, r), _) => Strength::from((Ranking::HighCard(r), kicks(1))),
            },
        }
    }

    /// the high card of a five-rank run, if any. a bit survives the
    /// shifts only when the four ranks below it are also present; the
    /// wheel is the one pattern the shifts miss.
    fn straight_high(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if ranks & WHEEL == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }

    /// rank multiplicities sorted by count descending then rank
    /// descending, the order that picks primary groups and kickers
    fn groups(five: &[Card; 5]) -> Vec<(u8, Rank)> {
        let mut counts = [0u8; 13];
        for card in five {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let mut groups = counts
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(i, &n)| (n, Rank::from(i as u8)))
            .collect::<Vec<(u8, Rank)>>();
        groups.sort_by(|a, b| b.cmp(a));
        groups
    }
}

/// iterate the 5-card subsets of a hand in a fixed combinatorial order,
/// by advancing a bitmask of positions through Gosper's hack. u64
/// positions cover the largest possible hand of 52 cards.
struct Subsets {
    cards: Vec<Card>,
    mask: u64,
}

impl From<Hand> for Subsets {
    fn from(hand: Hand) -> Self {
        Self {
            cards: Vec::<Card>::from(hand),
            mask: (1 << 5) - 1,
        }
    }
}

impl Iterator for Subsets {
    type Item = [Card; 5];
    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= 1 << self.cards.len() {
            None
        } else {
            let mut five = [Card::default(); 5];
            let mut k = 0;
            for (i, &card) in self.cards.iter().enumerate() {
                if self.mask & (1 << i) != 0 {
                    five[k] = card;
                    k += 1;
                }
            }
            let c = self.mask & self.mask.wrapping_neg();
            let r = self.mask + c;
            self.mask = (((r ^ self.mask) >> 2) / c) | r;
            Some(five)
        }
    }
}
