use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RatioError {
    // `Rational::new(_, 0)`
    InvalidArgument,

    // the rhs of a division has numerator 0
    DivisionByZero,
}

impl fmt::Display for RatioError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "{}",
            match self {
                RatioError::InvalidArgument => "invalid argument: denominator of a rational must not be zero",
                RatioError::DivisionByZero => "attempt to divide by a zero rational",
            },
        )
    }
}

impl std::error::Error for RatioError {}
