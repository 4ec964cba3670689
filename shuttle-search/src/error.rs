use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("given empty input")]
    EmptyInput,
    #[error("invalid text for timestamp: `{0}`")]
    InvalidTimestamp(String),
    #[error("no bus schedule in given input")]
    MissingSchedule,
    #[error("bus at position {position} has a period of zero")]
    ZeroPeriod { position: usize },
    #[error("schedule lists no buses")]
    NoBuses,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no congruences to solve")]
    EmptySystem,
    #[error("modulus must be positive, got {modulus}")]
    NonPositiveModulus { modulus: String },
    #[error("inconsistent congruence system at congruence {index}")]
    Inconsistent { index: usize },
    #[error("unknown merge strategy `{0}`, expected `search` or `bezout`")]
    UnknownStrategy(String),
}
