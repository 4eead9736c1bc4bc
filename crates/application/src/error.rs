use std::fmt::{Display, Formatter};

use platebook_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    Network(String),
    Io(String),
    Parse(String),
    MissingData(String),
    Unavailable {
        remote: Box<ApplicationError>,
        embedded: Box<ApplicationError>,
    },
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::MissingData(msg) => write!(f, "missing data: {msg}"),
            Self::Unavailable { remote, embedded } => {
                write!(f, "{remote} (inline fallback: {embedded})")
            }
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
