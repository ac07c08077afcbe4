/// failure taxonomy for the equity engine.
///
/// every variant is detected eagerly at validation or generation time and
/// indicates caller misuse, not a transient condition. nothing is retried:
/// either a full decision comes back or the call fails before any statistics
/// are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// malformed notation, duplicate cards, or fewer than 5 cards to evaluate
    InvalidInput(String),
    /// not enough distinct cards to satisfy arm generation or board completion
    InsufficientCards { need: usize, have: usize },
    /// an exclusion set inconsistent with the canonical deck
    InvalidState(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Error::InsufficientCards { need, have } => {
                write!(f, "insufficient cards: need {}, have {}", need, have)
            }
            Error::InvalidState(s) => write!(f, "invalid state: {}", s),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
