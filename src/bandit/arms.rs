use crate::cards::Deck;
use crate::cards::Hole;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;
use std::collections::BTreeSet;

/// sample `limit` distinct opponent holes from the deck, in generation
/// order. each draw takes two distinct cards from a fresh copy of the
/// deck, so a hole never shares a card with itself; the bitset key
/// deduplicates unordered pairs across the sequence.
///
/// feasibility is checked up front: asking for more distinct pairs than
/// the deck holds fails fast instead of sampling forever.
pub fn generate(deck: &Deck, limit: usize, rng: &mut impl Rng) -> Result<Vec<Hole>> {
    let pairs = deck.pairs();
    if pairs < limit {
        return Err(Error::InsufficientCards {
            need: limit,
            have: pairs,
        });
    }
    let mut seen = BTreeSet::new();
    let mut arms = Vec::with_capacity(limit);
    while arms.len() < limit {
        let mut copy = *deck;
        let hole = copy.hole(rng)?;
        if seen.insert(hole) {
            arms.push(hole);
        }
    }
    Ok(arms)
}
