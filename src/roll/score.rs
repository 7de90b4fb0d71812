use crate::common::*;
use crate::spec::{Difficulty, Modifier, RollSpec};

/// Collapses the kept dice pool into the final scalar.
#[enum_dispatch::enum_dispatch]
pub trait Score {
    fn score(&self, kept: &[UInt]) -> Int;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Score)]
pub enum Scorer {
    Sum(SumScore),
    Modified(ModifiedScore),
    Successes(SuccessScore),
}

impl Scorer {
    pub fn for_spec(spec: &RollSpec) -> Self {
        match (spec.difficulty(), spec.modifier()) {
            (Some(difficulty), modifier) => Self::Successes(SuccessScore {
                difficulty,
                modifier,
                sides: spec.sides().get(),
                target: spec.target(),
            }),
            (None, Some(modifier)) => Self::Modified(ModifiedScore(modifier)),
            (None, None) => Self::Sum(SumScore),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SumScore;

impl Score for SumScore {
    fn score(&self, kept: &[UInt]) -> Int {
        kept.iter().map(|&die| die as Int).sum()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ModifiedScore(pub Modifier);

impl Score for ModifiedScore {
    fn score(&self, kept: &[UInt]) -> Int {
        self.0.apply(SumScore.score(kept))
    }
}

/// Counts successes against a difficulty threshold instead of summing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SuccessScore {
    pub difficulty: Difficulty,
    pub modifier: Option<Modifier>,
    pub sides: UInt,
    pub target: Option<Int>,
}

impl Score for SuccessScore {
    fn score(&self, kept: &[UInt]) -> Int {
        let mut successes = 0;
        let mut ones = 0;
        let mut maxes = 0;
        for &die in kept {
            // specialization and botch tallies look at the raw face, the
            // threshold comparison at the modified value
            if die == 1 {
                ones += 1;
            }
            if die == self.sides {
                maxes += 1;
            }
            let value = self.modifier.map_or(die as Int, |m| m.apply(die as Int));
            if self.difficulty.direction.satisfied(value, self.difficulty.threshold) {
                successes += 1;
            }
        }

        let mut total = successes;
        if self.difficulty.doubles {
            total += maxes;
        }
        if self.difficulty.botches {
            total -= ones;
        }
        if self.difficulty.cancel {
            total -= maxes.min(ones);
        }
        self.collapse(total)
    }
}

impl SuccessScore {
    // The pass/fail collapse: met target, botched, or plain failure.
    fn collapse(&self, total: Int) -> Int {
        match self.target {
            None => total,
            Some(target) if total >= target => 1,
            Some(_) if self.difficulty.botches && total < 0 => -1,
            Some(_) => 0,
        }
    }
}
