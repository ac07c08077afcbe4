use std::time::Duration;
use std::time::Instant;

/// loop-termination policy for one decision call. production wants the
/// wall clock; tests want a fixed trial count so runs are reproducible
/// without depending on timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Clock(Duration),
    Trials(usize),
}

impl Default for Budget {
    fn default() -> Self {
        Self::Clock(crate::DEADLINE)
    }
}

impl Budget {
    pub fn start(self) -> Timer {
        Timer {
            budget: self,
            origin: Instant::now(),
        }
    }
}

/// a started budget. checked between iterations, which makes expiry the
/// sole cancellation mechanism: the loop stops cleanly and aggregation
/// proceeds with whatever statistics have accumulated.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    budget: Budget,
    origin: Instant,
}

impl Timer {
    pub fn expired(&self, trials: usize) -> bool {
        match self.budget {
            Budget::Clock(limit) => self.origin.elapsed() >= limit,
            Budget::Trials(cap) => trials >= cap,
        }
    }
}
