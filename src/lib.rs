//! Rolls dice described in compact tabletop notation.
//!
//! A roll description opens with a dice clause and may add modifiers in any
//! order after it:
//!
//! ```text
//! d20          one twenty-sided die
//! 4d6kh3       roll four d6, sum the highest three
//! 3d6rr2o      reroll 2 and below, at most once per die
//! 3d8*10       sum, then multiply by ten
//! 6d10>7sb     count dice at 7 or above; 10s count twice, 1s subtract
//! 6d10>7=4     1 if at least four successes, else 0
//! ```
//!
//! [`parse()`] turns the text into a [`RollSpec`], [`evaluate`] rolls one
//! against a [`Roller`], and [`roll()`] does both with the thread-local
//! random source.

mod common;
mod error;
mod parse;
mod roll;
mod session;
mod spec;

pub use common::{Direction, Int, KeepSelect, ModOp, NonZeroUInt, Num, UInt};
pub use error::RollError;
pub use parse::{parse, NotationError};
pub use roll::{
    evaluate, DefaultRoller, DieRoll, LineStringifier, RollOutcome, Roller, Score, Scorer,
    SimpleStringifier, Stringify,
};
pub use session::Session;
pub use spec::{Difficulty, Keep, Modifier, Reroll, RollSpec};

/// Rolls `notation` once with the thread-local random source.
pub fn roll(notation: &str) -> Result<RollOutcome, RollError> {
    let spec = parse(notation)?;
    evaluate(&spec, None, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_end_to_end() {
        let outcome = roll("4d6kh3").unwrap();
        assert_eq!(outcome.effective_dice().len(), 4);
        assert_eq!(outcome.kept_dice().len(), 3);
        assert!((3..=18).contains(&outcome.final_result()));
    }

    #[test]
    fn test_roll_surfaces_notation_errors() {
        assert!(matches!(
            roll("da20"),
            Err(RollError::InvalidNotation(_)),
        ));
    }
}
