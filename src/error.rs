#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("{0}")]
    InvalidNotation(#[from] crate::parse::NotationError),
    #[error("a difficulty roll cannot be floored to one")]
    ConfigurationConflict,
}
