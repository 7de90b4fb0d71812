use super::outcome::{DieRoll, RollOutcome};

/// Renders a finished roll for a terminal-style consumer. The default
/// methods cover the pieces; implementors decide the overall shape.
pub trait Stringify {
    fn str_die(&self, die: &DieRoll) -> String {
        die.to_string()
    }

    fn str_pool(&self, outcome: &RollOutcome) -> String {
        outcome
            .raw_rolls()
            .iter()
            .map(|die| self.str_die(die))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn stringify(&self, outcome: &RollOutcome) -> String;
}

/// Everything on one line: notation, dice as drawn, result.
#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {
    fn stringify(&self, outcome: &RollOutcome) -> String {
        format!(
            "{} ({}) = {}",
            outcome.source_notation(),
            self.str_pool(outcome),
            outcome.final_result(),
        )
    }
}

/// One value per line: each die on its own line, then the result.
#[derive(Default)]
pub struct LineStringifier;

impl LineStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for LineStringifier {
    fn stringify(&self, outcome: &RollOutcome) -> String {
        let mut out = String::new();
        for die in outcome.raw_rolls() {
            out.push_str(&self.str_die(die));
            out.push('\n');
        }
        out.push_str(&outcome.final_result().to_string());
        out
    }
}
