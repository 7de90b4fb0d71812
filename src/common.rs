use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};
pub use vec1::vec1;

pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// The type used for a count of dice.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ModOp {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for ModOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        };
        f.write_char(c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeepSelect {
    Highest,
    Lowest,
}

impl fmt::Display for KeepSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Highest => 'h',
            Self::Lowest => 'l',
        };
        f.write_char(c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    AtLeast,
    AtMost,
}

impl Direction {
    pub fn satisfied(self, value: Int, threshold: Int) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::AtMost => value <= threshold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::AtLeast => '>',
            Self::AtMost => '<',
        };
        f.write_char(c)
    }
}
