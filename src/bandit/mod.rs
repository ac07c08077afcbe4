pub mod arms;
pub use arms::*;

pub mod budget;
pub use budget::*;

pub mod engine;
pub use engine::*;

pub mod rollout;
pub use rollout::*;

pub mod tally;
pub use tally::*;
