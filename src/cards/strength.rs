use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::error::Error;

/// a hand's total-ordered strength: category and primary ranks first,
/// kickers to break what remains. produced fresh per evaluation and
/// never mutated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}
impl From<Ranking> for Strength {
    fn from(ranking: Ranking) -> Self {
        Self::from((ranking, Kickers::default()))
    }
}

/// evaluate a hand of at least five cards
impl TryFrom<Hand> for Strength {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Evaluator::from(hand).strength()
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.ranking, self.kicks)
    }
}
