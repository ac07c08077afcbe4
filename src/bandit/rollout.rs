use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Strength;
use crate::error::Result;

/// one Monte Carlo trial: complete the board and compare showdowns.
///
/// true iff the hero's best seven-card strength strictly exceeds the
/// villain's. a tie counts as a loss for the hero. that is a documented
/// policy, not an oversight: the estimate is deliberately conservative
/// and distinct from real chop rules.
///
/// `fill` brings the board to exactly five cards and is drawn upstream
/// from the deck excluding both holes and the revealed board.
pub fn simulate(hero: Hole, public: Hand, fill: Hand, villain: Hole) -> Result<bool> {
    let board = Hand::add(public, fill);
    let hero = Strength::try_from(Hand::add(Hand::from(hero), board))?;
    let villain = Strength::try_from(Hand::add(Hand::from(villain), board))?;
    Ok(hero > villain)
}
