use crate::common::*;
use crate::parse::NotationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Modifier {
    pub op: ModOp,
    pub operand: Int,
}

impl Modifier {
    pub fn apply(&self, value: Int) -> Int {
        match self.op {
            ModOp::Add => value + self.operand,
            ModOp::Sub => value - self.operand,
            ModOp::Mul => value * self.operand,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Reroll {
    /// Effective values at or below this are rerolled. Always strictly
    /// between zero and the die size.
    pub threshold: UInt,
    /// A bounded reroll draws at most one replacement per die; an unbounded
    /// one never produces a value at or below the threshold at all.
    pub once: bool,
}

impl fmt::Display for Reroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rr{}", self.threshold)?;
        if self.once {
            f.write_str("o")?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Keep {
    pub select: KeepSelect,
    /// Between 1 and the dice count.
    pub count: usize,
}

impl fmt::Display for Keep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{}{}", self.select, self.count)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Difficulty {
    pub direction: Direction,
    pub threshold: Int,
    /// A maximum-face die counts as two successes.
    pub doubles: bool,
    /// A die showing 1 subtracts one success.
    pub botches: bool,
    /// Each max/1 pairing cancels; requires both flags above.
    pub cancel: bool,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.threshold)?;
        if self.doubles {
            f.write_str("s")?;
        }
        if self.botches {
            f.write_str("b")?;
        }
        if self.cancel {
            f.write_str("c")?;
        }
        Ok(())
    }
}

/// A validated roll description. Built by [`parse`](crate::parse()) and
/// immutable afterwards; an unset clause is `None`, never a zero sentinel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollSpec {
    pub(crate) count: Num,
    pub(crate) sides: NonZeroUInt,
    pub(crate) modifier: Option<Modifier>,
    pub(crate) reroll: Option<Reroll>,
    pub(crate) keep: Option<Keep>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) target: Option<Int>,
    pub(crate) source: String,
}

impl RollSpec {
    pub fn count(&self) -> Num {
        self.count
    }

    pub fn sides(&self) -> NonZeroUInt {
        self.sides
    }

    pub fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    pub fn reroll(&self) -> Option<Reroll> {
        self.reroll
    }

    pub fn keep(&self) -> Option<Keep> {
        self.keep
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn target(&self) -> Option<Int> {
        self.target
    }

    /// The text this spec was parsed from, verbatim.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(reroll) = self.reroll {
            write!(f, "{}", reroll)?;
        }
        if let Some(modifier) = self.modifier {
            write!(f, "{}", modifier)?;
        }
        if let Some(keep) = self.keep {
            write!(f, "{}", keep)?;
        }
        if let Some(difficulty) = self.difficulty {
            write!(f, "{}", difficulty)?;
        }
        if let Some(target) = self.target {
            write!(f, "={}", target)?;
        }
        Ok(())
    }
}

impl FromStr for RollSpec {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}
