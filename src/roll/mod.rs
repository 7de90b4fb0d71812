mod outcome;
mod roller;
mod score;
mod stringify;

use crate::common::*;
use crate::error::RollError;
use crate::spec::{Keep, RollSpec};

pub use outcome::{DieRoll, RollOutcome};
pub use roller::{DefaultRoller, Roller};
pub use score::{Score, Scorer};
pub use stringify::{LineStringifier, SimpleStringifier, Stringify};

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;

type RResult<T> = Result<T, RollError>;

/// Rolls a spec once. Leaving `floor_one` unset picks the usual behavior:
/// sums never drop below one, success counts are left alone. Forcing it on
/// for a difficulty roll is a configuration error.
pub fn evaluate<R: Roller>(
    spec: &RollSpec,
    floor_one: Option<bool>,
    roller: &mut R,
) -> RResult<RollOutcome> {
    let floor_one = resolve_floor(spec, floor_one)?;

    let raw: Vec<DieRoll> = (0..spec.count().get())
        .map(|_| draw_die(spec, roller))
        .collect();
    let effective: Vec<UInt> = raw.iter().map(DieRoll::effective).collect();
    let kept = spec.keep().map(|keep| apply_keep(keep, &effective));

    let scored = Scorer::for_spec(spec).score(kept.as_deref().unwrap_or(&effective));
    let result = if floor_one && scored < 1 { 1 } else { scored };

    Ok(RollOutcome::new(
        spec.source().to_owned(),
        raw,
        effective,
        kept,
        result,
    ))
}

fn resolve_floor(spec: &RollSpec, floor_one: Option<bool>) -> RResult<bool> {
    match floor_one {
        Some(true) if spec.difficulty().is_some() => Err(RollError::ConfigurationConflict),
        Some(explicit) => Ok(explicit),
        None => Ok(spec.difficulty().is_none()),
    }
}

fn draw_die<R: Roller>(spec: &RollSpec, roller: &mut R) -> DieRoll {
    let sides = spec.sides();
    match spec.reroll() {
        // an unbounded reroll never offers a rejected value in the first
        // place, so a single draw from the shrunk range suffices
        Some(rule) if !rule.once => DieRoll::new(roller.roll_between(rule.threshold + 1, sides.get())),
        Some(rule) => {
            let mut die = DieRoll::new(roller.roll(sides));
            if die.effective() <= rule.threshold {
                // one replacement, kept no matter what it shows
                die.push(roller.roll(sides));
            }
            die
        }
        None => DieRoll::new(roller.roll(sides)),
    }
}

fn apply_keep(keep: Keep, effective: &[UInt]) -> Vec<UInt> {
    let mut pool = effective.to_vec();
    pool.sort_unstable();
    match keep.select {
        KeepSelect::Highest => pool.split_off(pool.len() - keep.count),
        KeepSelect::Lowest => {
            pool.truncate(keep.count);
            pool
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn outcome(s: &str, script: &[UInt]) -> RollOutcome {
        let spec = parse(s).unwrap();
        let mut roller = ScriptedRoller::new(script.iter().copied());
        let outcome = evaluate(&spec, None, &mut roller).unwrap();
        assert!(roller.exhausted(), "script left over for {:?}", s);
        outcome
    }

    fn check(s: &str, script: &[UInt], expected: Int) {
        assert_eq!(outcome(s, script).final_result(), expected, "for {:?}", s);
    }

    #[test]
    fn test_sum() {
        check("3d6", &[2, 5, 1], 8);
        check("1d20", &[17], 17);
    }

    #[test]
    fn test_modifier() {
        check("2d6+2", &[3, 4], 9);
        check("2d6-1", &[3, 4], 6);
        check("3d8*10", &[2, 7, 5], 140);
    }

    #[test]
    fn test_keep_highest() {
        let outcome = outcome("4d6kh3", &[2, 5, 1, 6]);
        assert_eq!(outcome.kept_dice(), &[2, 5, 6]);
        assert_eq!(outcome.effective_dice(), &[2, 5, 1, 6]);
        assert_eq!(outcome.final_result(), 13);
    }

    #[test]
    fn test_keep_lowest() {
        let outcome = outcome("4d6kl2", &[2, 5, 1, 6]);
        assert_eq!(outcome.kept_dice(), &[1, 2]);
        assert_eq!(outcome.final_result(), 3);
    }

    #[test]
    fn test_successes() {
        check("6d10>7", &[10, 7, 3, 10, 1, 7], 4);
        check("6d10>7s", &[10, 7, 3, 10, 1, 7], 6);
        check("6d10>7sb", &[10, 1, 1, 7, 3, 2], 1);
        check("6d10>7sbc", &[10, 10, 1, 8, 2, 3], 3);
        check("6d10<3", &[1, 3, 4, 10, 2, 5], 3);
    }

    #[test]
    fn test_success_target_collapse() {
        check("6d10>7=4", &[8, 8, 8, 2, 2, 2], 0);
        check("6d10>7=4", &[8, 8, 8, 8, 2, 2], 1);
        check("6d10>7b=4", &[1, 1, 2, 3, 4, 5], -1);
    }

    #[test]
    fn test_reroll_once() {
        // die one rerolls 2 into 5; die two rerolls 1 and lands on 1 again,
        // which stands; die three never triggers
        let outcome = outcome("3d6rr2o", &[2, 5, 1, 1, 4]);
        let raw = outcome.raw_rolls();
        assert_eq!(raw[0].first(), 2);
        assert_eq!(raw[0].effective(), 5);
        assert!(raw[0].rerolled());
        assert_eq!(raw[1].effective(), 1);
        assert!(raw[1].rerolled());
        assert!(!raw[2].rerolled());
        assert_eq!(outcome.effective_dice(), &[5, 1, 4]);
        assert_eq!(outcome.final_result(), 10);
    }

    #[test]
    fn test_unbounded_reroll_draws_above_threshold() {
        use rand::{rngs::StdRng, SeedableRng};

        let spec = parse("3d6rr2").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let outcome = evaluate(&spec, None, &mut rng).unwrap();
            assert!(outcome.effective_dice().iter().all(|&d| (3..=6).contains(&d)));
            assert!(outcome.raw_rolls().iter().all(|die| !die.rerolled()));
        }
    }

    #[test]
    fn test_floor_of_one() {
        check("1d6-10", &[1], 1);
        check("2d4-20", &[4, 4], 1);
        // an explicit opt-out exposes the raw value
        let spec = parse("1d6-10").unwrap();
        let mut roller = ScriptedRoller::new([1]);
        let outcome = evaluate(&spec, Some(false), &mut roller).unwrap();
        assert_eq!(outcome.final_result(), -9);
    }

    #[test]
    fn test_difficulty_skips_floor_by_default() {
        // two botches, no successes: the count may go negative
        check("6d10>7b", &[1, 1, 2, 3, 4, 5], -2);
    }

    #[test]
    fn test_floor_conflicts_with_difficulty() {
        let spec = parse("2d10>7").unwrap();
        let mut roller = ScriptedRoller::new([5, 8]);
        assert_eq!(
            evaluate(&spec, Some(true), &mut roller),
            Err(RollError::ConfigurationConflict),
        );
        // the conflict is raised before any die is drawn
        assert!(!roller.exhausted());
    }

    #[test]
    fn test_pool_sizes() {
        let outcome_all = outcome("5d8", &[1, 2, 3, 4, 5]);
        assert_eq!(outcome_all.raw_rolls().len(), 5);
        assert_eq!(outcome_all.effective_dice().len(), 5);
        assert_eq!(outcome_all.kept_dice().len(), 5);

        let outcome = outcome("5d8kh2", &[1, 2, 3, 4, 5]);
        assert_eq!(outcome.effective_dice().len(), 5);
        assert_eq!(outcome.kept_dice().len(), 2);
    }

    #[test]
    fn test_outcome_retains_source() {
        assert_eq!(outcome("3d6", &[1, 2, 3]).source_notation(), "3d6");
    }
}
