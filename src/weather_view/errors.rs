use std::fmt;

/// Structural failures that invalidate a whole view model
///
#[derive(Debug, PartialEq)]
pub enum AssembleError {
    InsufficientData(String),
    UnknownCondition(String),
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssembleError::InsufficientData(e) => write!(f, "AssembleError::InsufficientData: {}", e),
            AssembleError::UnknownCondition(e) => write!(f, "AssembleError::UnknownCondition: {}", e),
        }
    }
}
