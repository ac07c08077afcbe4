use crate::Probability;

/// win/play counters for one arm. created at arm generation, updated
/// after every rollout against that arm, discarded when the decision
/// call returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tally {
    wins: u32,
    plays: u32,
}

impl Tally {
    pub fn record(&mut self, won: bool) {
        self.plays += 1;
        self.wins += won as u32;
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn plays(&self) -> u32 {
        self.plays
    }
    pub fn rate(&self) -> Probability {
        match self.plays {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
    /// UCB1: observed win rate plus an exploration bonus that grows with
    /// the global play count and shrinks with this arm's play count
    pub fn ucb(&self, total: usize) -> f64 {
        self.rate() + (2. * ((total + 1) as f64).ln() / self.plays as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_of_unplayed_arm_is_zero() {
        assert_eq!(Tally::default().rate(), 0.);
    }

    #[test]
    fn record_accumulates() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally.wins(), 2);
        assert_eq!(tally.plays(), 3);
        assert_eq!(tally.rate(), 2. / 3.);
    }

    #[test]
    fn exploration_bonus_shrinks_with_plays() {
        let mut fresh = Tally::default();
        let mut stale = Tally::default();
        fresh.record(false);
        for _ in 0..100 {
            stale.record(false);
        }
        assert!(fresh.ucb(101) > stale.ucb(101));
    }
}
