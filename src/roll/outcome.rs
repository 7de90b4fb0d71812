use crate::common::*;
use std::fmt;

/// The draw history of a single die: the first draw, plus the replacement
/// when a bounded reroll fired.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DieRoll {
    values: NonEmpty<UInt>,
}

impl DieRoll {
    pub(crate) fn new(value: UInt) -> Self {
        Self {
            values: vec1![value],
        }
    }

    pub(crate) fn push(&mut self, value: UInt) {
        self.values.push(value);
    }

    pub fn first(&self) -> UInt {
        *self.values.first()
    }

    /// The value that scores: the replacement when one was drawn, otherwise
    /// the first draw.
    pub fn effective(&self) -> UInt {
        *self.values.last()
    }

    pub fn rerolled(&self) -> bool {
        self.values.len() > 1
    }
}

impl fmt::Display for DieRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rerolled() {
            write!(f, "{} -> {}", self.first(), self.effective())
        } else {
            write!(f, "{}", self.effective())
        }
    }
}

/// Everything a single evaluation produced. Owned by the caller; the
/// evaluator keeps nothing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollOutcome {
    source: String,
    raw: Vec<DieRoll>,
    effective: Vec<UInt>,
    kept: Option<Vec<UInt>>,
    result: Int,
}

impl RollOutcome {
    pub(crate) fn new(
        source: String,
        raw: Vec<DieRoll>,
        effective: Vec<UInt>,
        kept: Option<Vec<UInt>>,
        result: Int,
    ) -> Self {
        Self {
            source,
            raw,
            effective,
            kept,
            result,
        }
    }

    /// The notation this outcome was rolled from.
    pub fn source_notation(&self) -> &str {
        &self.source
    }

    /// Per-die draw histories, in draw order.
    pub fn raw_rolls(&self) -> &[DieRoll] {
        &self.raw
    }

    /// Post-reroll values, in draw order, before any keep filtering.
    pub fn effective_dice(&self) -> &[UInt] {
        &self.effective
    }

    /// The dice that scored. Falls back to the effective pool when the spec
    /// had no keep clause.
    pub fn kept_dice(&self) -> &[UInt] {
        self.kept.as_deref().unwrap_or(&self.effective)
    }

    pub fn final_result(&self) -> Int {
        self.result
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_roll_history() {
        let mut die = DieRoll::new(2);
        assert_eq!(die.effective(), 2);
        assert!(!die.rerolled());
        assert_eq!(die.to_string(), "2");

        die.push(5);
        assert_eq!(die.first(), 2);
        assert_eq!(die.effective(), 5);
        assert!(die.rerolled());
        assert_eq!(die.to_string(), "2 -> 5");
    }

    #[test]
    fn test_kept_dice_falls_back_to_effective() {
        let outcome = RollOutcome::new(
            "2d6".to_owned(),
            vec![DieRoll::new(3), DieRoll::new(4)],
            vec![3, 4],
            None,
            7,
        );
        assert_eq!(outcome.kept_dice(), &[3, 4]);

        let outcome = RollOutcome::new(
            "2d6kh1".to_owned(),
            vec![DieRoll::new(3), DieRoll::new(4)],
            vec![3, 4],
            Some(vec![4]),
            4,
        );
        assert_eq!(outcome.kept_dice(), &[4]);
        assert_eq!(outcome.effective_dice(), &[3, 4]);
    }
}
