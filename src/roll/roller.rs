use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

pub type DefaultRoller = rand::prelude::ThreadRng;

/// The source of face values. Implemented for every [`rand::Rng`], so tests
/// can swap in a seeded or scripted source without touching the evaluator.
pub trait Roller {
    /// Draws a single face of a die with the given number of sides.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.roll_between(1, sides.get())
    }

    /// Draws uniformly from the inclusive range `lo..=hi`.
    fn roll_between(&mut self, lo: UInt, hi: UInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll_between(&mut self, lo: UInt, hi: UInt) -> UInt {
        self.gen_range(lo..=hi)
    }
}

#[cfg(test)]
pub(crate) use script::ScriptedRoller;
