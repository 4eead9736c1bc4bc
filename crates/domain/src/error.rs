use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidPageIndex(i64),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageIndex(value) => {
                write!(f, "page index must be a positive integer, got {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
