use crate::common::Int;
use crate::error::RollError;
use crate::roll::{evaluate, DefaultRoller, RollOutcome, Roller};
use crate::spec::RollSpec;

/// Rolls one spec repeatedly and keeps every outcome of the sitting. The
/// notation can change mid-session without discarding earlier outcomes.
pub struct Session<R: Roller = DefaultRoller> {
    spec: RollSpec,
    floor_one: Option<bool>,
    roller: R,
    outcomes: Vec<RollOutcome>,
}

impl Session<DefaultRoller> {
    pub fn new(notation: &str) -> Result<Self, RollError> {
        Self::with_roller(notation, rand::thread_rng())
    }
}

impl<R: Roller> Session<R> {
    pub fn with_roller(notation: &str, roller: R) -> Result<Self, RollError> {
        let spec = crate::parse::parse(notation)?;
        Ok(Self {
            spec,
            floor_one: None,
            roller,
            outcomes: Vec::new(),
        })
    }

    /// Forces or forbids the floor-of-one for every subsequent roll.
    pub fn floor_one(mut self, floor_one: bool) -> Self {
        self.floor_one = Some(floor_one);
        self
    }

    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    pub fn outcomes(&self) -> &[RollOutcome] {
        &self.outcomes
    }

    pub fn last_result(&self) -> Option<Int> {
        self.outcomes.last().map(RollOutcome::final_result)
    }

    /// Rolls the current spec once and appends the outcome.
    pub fn roll(&mut self) -> Result<&RollOutcome, RollError> {
        let outcome = evaluate(&self.spec, self.floor_one, &mut self.roller)?;
        self.outcomes.push(outcome);
        Ok(self.outcomes.last().expect("outcome was just pushed"))
    }

    /// Swaps in a new notation; accumulated outcomes stay.
    pub fn set_notation(&mut self, notation: &str) -> Result<(), RollError> {
        self.spec = crate::parse::parse(notation)?;
        Ok(())
    }
}
