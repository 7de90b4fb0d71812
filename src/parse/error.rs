use crate::common::UInt;
use thiserror::Error;

/// Why a roll description was rejected. Each variant names the clause at
/// fault, so callers can report more than "bad input".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error("{0:?} does not start with a dice clause (expected `<count>d<sides>`)")]
    MissingDiceClause(String),
    #[error("dice count must be at least 1")]
    ZeroDiceCount,
    #[error("dice must have at least 1 side")]
    ZeroSides,
    #[error("reroll threshold {threshold} must be above 0 and below the die size {sides}")]
    RerollOutOfRange { threshold: UInt, sides: UInt },
    #[error("cannot keep {count} of {dice} dice")]
    KeepOutOfRange { count: usize, dice: usize },
    #[error("doubled successes ('s') require an at-least ('>') difficulty")]
    DoublesAtMost,
    #[error("cancellation ('c') requires both doubles ('s') and botches ('b')")]
    CancelWithoutPair,
    #[error("a success target ('=') requires a difficulty clause")]
    TargetWithoutDifficulty,
}
