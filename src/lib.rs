pub mod bandit;
pub mod cards;
pub mod error;

/// estimated chance of winning a showdown, always in [0, 1]
pub type Probability = f64;

/// how many candidate opponent holes the bandit spreads its budget across
pub const ARM_LIMIT: usize = 100;

/// wall clock budget for one decision, unless a trial cap is given
pub const DEADLINE: std::time::Duration = std::time::Duration::from_millis(9_800);

/// stay once the estimated win probability reaches this threshold, inclusive
pub const STAY_THRESHOLD: Probability = 0.5;
