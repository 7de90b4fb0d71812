mod error;
mod lexer;
mod parser;

pub use error::NotationError;

pub fn parse(s: &str) -> Result<crate::spec::RollSpec, NotationError> {
    parser::Parser::new(s).parse()
}
