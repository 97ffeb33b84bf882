use crate::Rational;
use std::fmt;

// The stored fields as they are. It doesn't reduce.
impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Rational({self})")
    }
}
