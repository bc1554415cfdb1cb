use std::fmt;

/// Which argument of a sum failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// An operand was not a string of ASCII decimal digits.
    InvalidArgument { operand: Operand },
}

impl SumError {
    pub const INVALID_ARGUMENT_MESSAGE: &'static str = "Arguments must be numeric strings";

    pub fn invalid_argument(operand: Operand) -> Self {
        Self::InvalidArgument { operand }
    }

    pub fn operand(&self) -> Operand {
        match self {
            Self::InvalidArgument { operand } => *operand,
        }
    }
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { .. } => write!(f, "{}", Self::INVALID_ARGUMENT_MESSAGE),
        }
    }
}

impl std::error::Error for SumError {}

pub type Result<T> = std::result::Result<T, SumError>;
