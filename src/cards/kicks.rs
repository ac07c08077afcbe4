use super::rank::Rank;

/// a hand's kicker cards, the ranks left over after the primary
/// category is consumed. one bit per rank, so the derived Ord
/// compares kicker sets of equal size exactly like descending
/// rank-by-rank comparison.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism (up to permutation)
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0u8..13)
            .filter(|i| k.0 & (1 << i) != 0)
            .map(Rank::from)
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_like_descending_ranks() {
        // K Q 2 beats K J T: highest differing rank decides
        let a = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Two]);
        let b = Kickers::from(vec![Rank::King, Rank::Jack, Rank::Ten]);
        assert!(a > b);
    }

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::Three, Rank::Nine, Rank::Ace];
        assert_eq!(ranks, Vec::<Rank>::from(Kickers::from(ranks.clone())));
    }
}
