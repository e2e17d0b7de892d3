use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The dice or the amount of trials asked for can't be simulated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(Reason),
    /// The notation could not be parsed, contains the rendered parser error.
    #[error("{0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("a die needs at least 2 sides, got {0}")]
    TooFewSides(u32),
    #[error("a collection needs at least one die")]
    NoDice,
    #[error("the sides of all dice add up to more than {0}")]
    TooManySides(u32),
    #[error("at least one trial is required")]
    NoTrials,
}

impl Error {
    /// The reason behind an [`Error::InvalidConfiguration`], if that's what this is.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Error::InvalidConfiguration(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<Reason> for Error {
    fn from(reason: Reason) -> Self {
        Error::InvalidConfiguration(reason)
    }
}
