#![deny(unused_imports)]

use log::error;

mod cmp;
mod convert;
mod error;
mod fmt;
mod gcd;
mod op;


pub use error::RatioError;

// `denom` is never 0.
// Values made by `Rational::new` are stored as-is: not reduced, and the sign of `denom` is not normalized.
// Results of arithmetic operations are always reduced, but `denom` may still be negative (`2/-4` -> `1/-2`).
#[derive(Clone, Copy)]
pub struct Rational {
    numer: i32,
    denom: i32,
}

impl Rational {
    pub fn new(numer: i32, denom: i32) -> Result<Self, RatioError> {
        if denom == 0 {
            error!("Rational::new({numer}, {denom}): denominator is zero");
            return Err(RatioError::InvalidArgument);
        }

        Ok(Rational { numer, denom })
    }

    pub fn from_int(n: i32) -> Self {
        Rational { numer: n, denom: 1 }
    }

    pub fn numer(&self) -> i32 {
        self.numer
    }

    pub fn denom(&self) -> i32 {
        self.denom
    }

    /// `self + 1`
    pub fn increment(self) -> Self {
        self + 1
    }

    /// `self - 1`
    pub fn decrement(self) -> Self {
        self - 1
    }

    // Every arithmetic operation builds its raw result with this.
    // `denom` can only be 0 here if a multiplication has wrapped around.
    pub(crate) fn from_raw_parts(numer: i32, denom: i32) -> Self {
        match Rational::new(numer, denom) {
            Ok(r) => r,
            Err(e) => panic!("{e}: {numer}/{denom}"),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational { numer: 0, denom: 1 }
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_int(n)
    }
}
