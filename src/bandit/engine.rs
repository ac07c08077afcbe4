use super::arms;
use super::budget::Budget;
use super::rollout;
use super::tally::Tally;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::error::Error;
use crate::error::Result;
use crate::Probability;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// knobs for one decision call. `budget` makes the deadline-vs-trials
/// choice structural: a fixed trial count always wins over the wall
/// clock, which is what reproducible tests need.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub arms: usize,
    pub budget: Budget,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arms: crate::ARM_LIMIT,
            budget: Budget::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Fold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Stay => write!(f, "stay"),
            Action::Fold => write!(f, "fold"),
        }
    }
}

/// the outcome of one decision call
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub action: Action,
    pub probability: Probability,
    pub simulations: usize,
}

/// arms and their statistics for exactly one decision call. owned
/// exclusively by the engine loop and discarded on return.
struct Session {
    arms: Vec<Hole>,
    tallies: Vec<Tally>,
    total: usize,
}

impl Session {
    fn new(arms: Vec<Hole>) -> Self {
        let tallies = vec![Tally::default(); arms.len()];
        Self {
            arms,
            tallies,
            total: 0,
        }
    }

    /// UCB1 selection. any unplayed arm is explored first, in
    /// generation order; otherwise the highest score wins, with ties
    /// resolved to the earliest arm so selection is deterministic.
    fn choose(&self) -> Option<usize> {
        if let Some(i) = self.tallies.iter().position(|t| t.plays() == 0) {
            return Some(i);
        }
        self.tallies
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, tally)| {
                let score = tally.ucb(self.total);
                match best {
                    Some((_, top)) if top >= score => best,
                    _ => Some((i, score)),
                }
            })
            .map(|(i, _)| i)
    }

    fn record(&mut self, chosen: usize, won: bool) {
        self.tallies[chosen].record(won);
        self.total += 1;
    }

    /// zero simulations yields no information and defaults to the
    /// fold-safe probability of zero
    fn probability(&self) -> Probability {
        match self.total {
            0 => 0.,
            n => {
                let wins = self.tallies.iter().map(|t| t.wins()).sum::<u32>();
                wins as Probability / n as Probability
            }
        }
    }

    fn verdict(self) -> Decision {
        let probability = self.probability();
        Decision {
            action: match probability >= crate::STAY_THRESHOLD {
                true => Action::Stay,
                false => Action::Fold,
            },
            probability,
            simulations: self.total,
        }
    }
}

/// the bandit decision engine. spreads a fixed budget of rollouts
/// across candidate opponent holes via UCB1 and aggregates the
/// per-arm outcomes into one win-probability estimate.
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        match config.arms {
            0 => Err(Error::InvalidInput("arm limit must be at least 1".into())),
            _ => Ok(Self { config }),
        }
    }

    /// estimate equity for the hero's hole against one unknown opponent
    /// and emit stay (win probability >= 0.5, inclusive) or fold.
    ///
    /// all state lives and dies inside this call. errors from arm
    /// generation and evaluation surface unchanged: they indicate
    /// malformed inputs and abort the decision before any statistics
    /// are reported.
    pub fn decide(&self, hero: Hole, public: Hand) -> Result<Decision> {
        match public.size() {
            0 | 3 | 4 => {}
            n => {
                return Err(Error::InvalidInput(format!(
                    "board must show 0, 3, or 4 cards, got {}",
                    n
                )))
            }
        }
        let pocket = Hand::from(hero);
        if !Hand::disjoint(pocket, public) {
            return Err(Error::InvalidInput(format!(
                "hole {} conflicts with board {}",
                hero, public
            )));
        }
        let ref mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let unknowns = 5 - public.size();
        let deck = Deck::full().without(Hand::add(pocket, public));
        let mut session = Session::new(arms::generate(&deck, self.config.arms, rng)?);
        let timer = self.config.budget.start();
        while !timer.expired(session.total) {
            let Some(chosen) = session.choose() else {
                break;
            };
            let villain = session.arms[chosen];
            let ref mut deck = deck.without(Hand::from(villain));
            let fill = deck.deal(unknowns, rng)?;
            let won = rollout::simulate(hero, public, fill, villain)?;
            session.record(chosen, won);
        }
        Ok(session.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn arms_of(n: usize) -> Vec<Hole> {
        let ref mut rng = SmallRng::seed_from_u64(1);
        arms::generate(&Deck::full(), n, rng).unwrap()
    }

    #[test]
    fn every_arm_explored_before_any_repeat() {
        let k = 10;
        let mut session = Session::new(arms_of(k));
        for _ in 0..k {
            let chosen = session.choose().unwrap();
            assert_eq!(session.tallies[chosen].plays(), 0);
            session.record(chosen, true);
        }
        assert!(session.tallies.iter().all(|t| t.plays() == 1));
    }

    #[test]
    fn ucb_ties_resolve_to_generation_order() {
        let mut session = Session::new(arms_of(3));
        for i in 0..3 {
            session.record(i, false);
        }
        // identical statistics, identical scores: first arm wins
        assert_eq!(session.choose(), Some(0));
    }

    #[test]
    fn ucb_prefers_the_winning_arm() {
        let mut session = Session::new(arms_of(2));
        for _ in 0..5 {
            session.record(0, true);
            session.record(1, false);
        }
        assert_eq!(session.choose(), Some(0));
    }

    #[test]
    fn zero_simulations_fold_safe() {
        let engine = Engine::new(Config {
            budget: Budget::Trials(0),
            seed: Some(42),
            ..Config::default()
        })
        .unwrap();
        let hero = Hole::try_from("7c 2h").unwrap();
        let public = Hand::try_from("Qd 9s 5c").unwrap();
        let decision = engine.decide(hero, public).unwrap();
        assert_eq!(decision.simulations, 0);
        assert_eq!(decision.probability, 0.);
        assert_eq!(decision.action, Action::Fold);
    }

    #[test]
    fn unbeatable_hand_stays() {
        // hero holds quad aces on the turn. the board spreads all four
        // suits, so with one card to come no flush line exists and the
        // best any villain makes is quad kings
        let engine = Engine::new(Config {
            budget: Budget::Trials(50),
            seed: Some(42),
            ..Config::default()
        })
        .unwrap();
        let hero = Hole::try_from("As Ah").unwrap();
        let public = Hand::try_from("Ad Ac Ks Kh").unwrap();
        let decision = engine.decide(hero, public).unwrap();
        assert_eq!(decision.probability, 1.);
        assert_eq!(decision.action, Action::Stay);
    }

    #[test]
    fn probability_stays_in_bounds() {
        let engine = Engine::new(Config {
            budget: Budget::Trials(200),
            seed: Some(3),
            ..Config::default()
        })
        .unwrap();
        let hero = Hole::try_from("Jh Td").unwrap();
        let public = Hand::try_from("9c 8d 2s").unwrap();
        let decision = engine.decide(hero, public).unwrap();
        assert!(decision.probability >= 0.);
        assert!(decision.probability <= 1.);
        assert_eq!(decision.simulations, 200);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let config = Config {
            budget: Budget::Trials(500),
            seed: Some(42),
            ..Config::default()
        };
        let hero = Hole::try_from("7c 2h").unwrap();
        let public = Hand::try_from("Qd 9s 5c").unwrap();
        let a = Engine::new(config).unwrap().decide(hero, public).unwrap();
        let b = Engine::new(config).unwrap().decide(hero, public).unwrap();
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.simulations, b.simulations);
        assert_eq!(a.action, b.action);
        assert_eq!(a.simulations, 500);
    }

    #[test]
    fn rejects_bad_board_size() {
        let engine = Engine::new(Config::default()).unwrap();
        let hero = Hole::try_from("7c 2h").unwrap();
        let public = Hand::try_from("Qd 9s").unwrap();
        assert!(matches!(
            engine.decide(hero, public),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_conflicting_cards() {
        let engine = Engine::new(Config::default()).unwrap();
        let hero = Hole::try_from("Qd 2h").unwrap();
        let public = Hand::try_from("Qd 9s 5c").unwrap();
        assert!(matches!(
            engine.decide(hero, public),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_zero_arm_limit() {
        let config = Config {
            arms: 0,
            ..Config::default()
        };
        assert!(matches!(Engine::new(config), Err(Error::InvalidInput(_))));
    }
}
