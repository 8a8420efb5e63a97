use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CreationError {
    ZeroBins,
    NonFiniteBounds,
    LowNotBelowHigh,
    ContentsLengthMismatch { expected: usize, actual: usize },
    EmptyPalette,
    NegativeTolerance,
    NonFiniteTolerance,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidArgument {
    NegativeTargetArea,
    NonFiniteTargetArea,
    NegativeWeight,
    NonFiniteWeight,
    NegativeFactor,
    NonFiniteFactor,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScalingError {
    InvalidArgument(InvalidArgument),
    ScalingInvariantViolation { expected: f64, actual: f64 },
    EnsembleAreaMismatch { expected: f64, actual: f64 },
}

impl From<InvalidArgument> for ScalingError {
    fn from(e: InvalidArgument) -> Self {
        ScalingError::InvalidArgument(e)
    }
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CreationError::ZeroBins => write!(f, "histogram needs at least one bin"),
            CreationError::NonFiniteBounds => write!(f, "histogram axis bounds must be finite"),
            CreationError::LowNotBelowHigh => write!(f, "lower axis bound must be below the upper bound"),
            CreationError::ContentsLengthMismatch { expected, actual } => {
                write!(f, "expected {} bin contents, got {}", expected, actual)
            }
            CreationError::EmptyPalette => write!(f, "palette must hold at least one colour"),
            CreationError::NegativeTolerance => write!(f, "tolerance must not be negative"),
            CreationError::NonFiniteTolerance => write!(f, "tolerance must be finite"),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            InvalidArgument::NegativeTargetArea => "target area is negative",
            InvalidArgument::NonFiniteTargetArea => "target area is not finite",
            InvalidArgument::NegativeWeight => "weight is negative",
            InvalidArgument::NonFiniteWeight => "weight is not finite",
            InvalidArgument::NegativeFactor => "scale factor is negative",
            InvalidArgument::NonFiniteFactor => "scale factor is not finite",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScalingError::InvalidArgument(ref e) => write!(f, "invalid argument: {}", e),
            ScalingError::ScalingInvariantViolation { expected, actual } => write!(
                f,
                "scaled integral {} deviates from intended {} beyond tolerance",
                actual, expected
            ),
            ScalingError::EnsembleAreaMismatch { expected, actual } => write!(
                f,
                "combined ensemble area {} deviates from target {} beyond tolerance",
                actual, expected
            ),
        }
    }
}

impl Error for CreationError {}
impl Error for InvalidArgument {}
impl Error for ScalingError {}
