use super::error::NotationError;
use super::lexer::{lexer, DiceClause, Lexer, Token};
use crate::common::*;
use crate::spec::{Difficulty, Keep, Reroll, RollSpec};
use logos_iter::LogosIter;

type PResult<T> = Result<T, NotationError>;

/// Extracts clauses from the token stream independently of their order.
/// Only the dice clause has a fixed position: it must lead. Unrecognized
/// input and repeated clauses are skipped, so a valid prefix with trailing
/// garbage still parses; the notation has always been tolerant of that.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult<RollSpec> {
        let dice = self.leading_dice()?;
        let count = Num::new(dice.count).ok_or(NotationError::ZeroDiceCount)?;
        let sides = NonZeroUInt::new(dice.sides).ok_or(NotationError::ZeroSides)?;

        let mut modifier = None;
        let mut reroll = None;
        let mut keep = None;
        let mut difficulty = None;
        let mut target = None;

        for token in &mut self.lexer {
            match token {
                Token::Reroll(clause) if reroll.is_none() => {
                    reroll = Some(check_reroll(clause, sides)?);
                }
                Token::Modifier(clause) if modifier.is_none() => {
                    modifier = Some(clause);
                }
                Token::Keep(clause) if keep.is_none() => {
                    keep = Some(check_keep(clause, count)?);
                }
                Token::Difficulty(clause) if difficulty.is_none() => {
                    difficulty = Some(check_difficulty(clause)?);
                }
                Token::Target(n) if target.is_none() => {
                    target = Some(n);
                }
                _ => {}
            }
        }

        if target.is_some() && difficulty.is_none() {
            return Err(NotationError::TargetWithoutDifficulty);
        }

        Ok(RollSpec {
            count,
            sides,
            modifier,
            reroll,
            keep,
            difficulty,
            target,
            source: self.source.to_owned(),
        })
    }

    // The coarse shape check: the text is a roll description only if its
    // first token is the dice clause.
    fn leading_dice(&mut self) -> PResult<DiceClause> {
        let clause = match self.lexer.peek() {
            Some(&Token::Dice(clause)) => clause,
            _ => return Err(NotationError::MissingDiceClause(self.source.to_owned())),
        };
        self.lexer.next();
        Ok(clause)
    }
}

fn check_reroll(clause: Reroll, sides: NonZeroUInt) -> PResult<Reroll> {
    if clause.threshold == 0 || clause.threshold >= sides.get() {
        Err(NotationError::RerollOutOfRange {
            threshold: clause.threshold,
            sides: sides.get(),
        })
    } else {
        Ok(clause)
    }
}

fn check_keep(clause: Keep, count: Num) -> PResult<Keep> {
    if clause.count == 0 || clause.count > count.get() {
        Err(NotationError::KeepOutOfRange {
            count: clause.count,
            dice: count.get(),
        })
    } else {
        Ok(clause)
    }
}

fn check_difficulty(clause: Difficulty) -> PResult<Difficulty> {
    if clause.doubles && clause.direction == Direction::AtMost {
        return Err(NotationError::DoublesAtMost);
    }
    if clause.cancel && !(clause.doubles && clause.botches) {
        return Err(NotationError::CancelWithoutPair);
    }
    Ok(clause)
}
