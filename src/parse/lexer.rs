use crate::common::*;
use crate::spec::{Difficulty, Keep, Modifier, Reroll};
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, Token>, Token>;

pub fn lexer(s: &str) -> Lexer {
    Token::lexer(s).peekable_lexer()
}

/// One token per notation clause. Case-insensitivity is spelled out in the
/// character classes because the clause letters double as value boundaries.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum Token {
    #[regex(r"[0-9]*[dD][0-9]+", |lex| dice_clause(lex.slice()))]
    Dice(DiceClause),

    #[regex(r"[rR][rR][0-9]+[oO]?", |lex| reroll_clause(lex.slice()))]
    Reroll(Reroll),

    #[regex(r"[*xX+-][0-9]+", |lex| modifier_clause(lex.slice()))]
    Modifier(Modifier),

    #[regex(r"[kK][hHlL][0-9]+", |lex| keep_clause(lex.slice()))]
    Keep(Keep),

    #[regex(r"[<>][0-9]+[sSbBcC]*", |lex| difficulty_clause(lex.slice()))]
    Difficulty(Difficulty),

    #[regex(r"=[0-9]+", |lex| lex.slice()[1..].parse::<Int>().ok())]
    Target(Int),

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

/// Dice clause before the positivity checks; zero count/sides are rejected
/// by the parser, not here.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DiceClause {
    pub count: usize,
    pub sides: UInt,
}

fn dice_clause(s: &str) -> Option<DiceClause> {
    let (count, sides) = s.split_once(|c| c == 'd' || c == 'D')?;
    let count = if count.is_empty() { 1 } else { count.parse().ok()? };
    let sides = sides.parse().ok()?;
    Some(DiceClause { count, sides })
}

fn reroll_clause(s: &str) -> Option<Reroll> {
    let digits = &s[2..];
    let (digits, once) = match digits.as_bytes().last() {
        Some(b'o') | Some(b'O') => (&digits[..digits.len() - 1], true),
        _ => (digits, false),
    };
    let threshold = digits.parse().ok()?;
    Some(Reroll { threshold, once })
}

fn modifier_clause(s: &str) -> Option<Modifier> {
    let op = match s.as_bytes()[0] {
        b'+' => ModOp::Add,
        b'-' => ModOp::Sub,
        _ => ModOp::Mul,
    };
    let operand = s[1..].parse().ok()?;
    Some(Modifier { op, operand })
}

fn keep_clause(s: &str) -> Option<Keep> {
    let select = match s.as_bytes()[1] {
        b'h' | b'H' => KeepSelect::Highest,
        _ => KeepSelect::Lowest,
    };
    let count = s[2..].parse().ok()?;
    Some(Keep { select, count })
}

fn difficulty_clause(s: &str) -> Option<Difficulty> {
    let direction = match s.as_bytes()[0] {
        b'>' => Direction::AtLeast,
        _ => Direction::AtMost,
    };
    let rest = &s[1..];
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let threshold = rest[..digits_end].parse().ok()?;

    let mut clause = Difficulty {
        direction,
        threshold,
        doubles: false,
        botches: false,
        cancel: false,
    };
    for flag in rest[digits_end..].bytes() {
        match flag {
            b's' | b'S' => clause.doubles = true,
            b'b' | b'B' => clause.botches = true,
            b'c' | b'C' => clause.cancel = true,
            // the token pattern admits nothing else
            _ => return None,
        }
    }
    Some(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        Token::lexer(s).collect()
    }

    #[test]
    fn test_lex_full_notation() {
        assert_eq!(
            tokens("4d6kh3rr2o>7sb=4"),
            vec![
                Token::Dice(DiceClause { count: 4, sides: 6 }),
                Token::Keep(Keep { select: KeepSelect::Highest, count: 3 }),
                Token::Reroll(Reroll { threshold: 2, once: true }),
                Token::Difficulty(Difficulty {
                    direction: Direction::AtLeast,
                    threshold: 7,
                    doubles: true,
                    botches: true,
                    cancel: false,
                }),
                Token::Target(4),
            ],
        );
    }

    #[test]
    fn test_lex_is_case_insensitive() {
        assert_eq!(tokens("2D6X10"), tokens("2d6x10"));
        assert_eq!(tokens("3D6RR2O"), tokens("3d6rr2o"));
        assert_eq!(tokens("4D6KL2"), tokens("4d6kl2"));
    }

    #[test]
    fn test_lex_modifier_ops() {
        assert_eq!(
            tokens("+2-1*10x3"),
            vec![
                Token::Modifier(Modifier { op: ModOp::Add, operand: 2 }),
                Token::Modifier(Modifier { op: ModOp::Sub, operand: 1 }),
                Token::Modifier(Modifier { op: ModOp::Mul, operand: 10 }),
                Token::Modifier(Modifier { op: ModOp::Mul, operand: 3 }),
            ],
        );
    }

    #[test]
    fn test_lex_count_defaults_to_one() {
        assert_eq!(
            tokens("d20"),
            vec![Token::Dice(DiceClause { count: 1, sides: 20 })],
        );
    }

    #[test]
    fn test_lex_unrecognized_input() {
        assert!(tokens("da20").contains(&Token::Error));
        assert!(!tokens("da20").iter().any(|t| matches!(t, Token::Dice(_))));
    }
}
