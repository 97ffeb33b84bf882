use crate::{RatioError, Rational};
use log::error;
use std::iter::{Product, Sum};
use std::ops::{
    Add,
    AddAssign,
    Div,
    DivAssign,
    Mul,
    MulAssign,
    Neg,
    Sub,
    SubAssign,
};

pub fn add_ratio(lhs: Rational, rhs: Rational) -> Rational {
    let denom = lhs.denom * rhs.denom;
    let numer = lhs.numer * rhs.denom + rhs.numer * lhs.denom;
    Rational::from_raw_parts(numer, denom).reduce()
}

// `add_ratio` already reduces the result, so the second `reduce` is a no-op.
pub fn sub_ratio(lhs: Rational, rhs: Rational) -> Rational {
    add_ratio(lhs, neg_ratio(rhs)).reduce()
}

pub fn mul_ratio(lhs: Rational, rhs: Rational) -> Rational {
    Rational::from_raw_parts(lhs.numer * rhs.numer, lhs.denom * rhs.denom).reduce()
}

pub fn div_ratio(lhs: Rational, rhs: Rational) -> Result<Rational, RatioError> {
    if rhs.numer == 0 {
        error!("div_ratio({lhs}, {rhs}): rhs is zero");
        return Err(RatioError::DivisionByZero);
    }

    Ok(Rational::from_raw_parts(lhs.numer * rhs.denom, lhs.denom * rhs.numer).reduce())
}

// -1 * r
pub fn neg_ratio(r: Rational) -> Rational {
    mul_ratio(Rational::from(-1), r)
}

fn div_or_panic(lhs: Rational, rhs: Rational) -> Rational {
    match div_ratio(lhs, rhs) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

impl Rational {
    /// `Err(RatioError::DivisionByZero)` if `rhs` is zero. The `/` operator panics in that case.
    pub fn checked_div(self, rhs: Rational) -> Result<Rational, RatioError> {
        div_ratio(self, rhs)
    }
}

// Rational (op) Rational, Rational (op) i32 and i32 (op) Rational, with or without references.
// An i32 operand is always promoted with `Rational::from` first.
macro_rules! impl_binary_op {
    ($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $f: ident) => {
        impl $op for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $f(self, rhs)
            }
        }

        impl $op<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $f(self, *rhs)
            }
        }

        impl $op<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $f(*self, rhs)
            }
        }

        impl $op<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $f(*self, *rhs)
            }
        }

        impl $op<i32> for Rational {
            type Output = Rational;

            fn $method(self, rhs: i32) -> Rational {
                $f(self, Rational::from(rhs))
            }
        }

        impl $op<Rational> for i32 {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $f(Rational::from(self), rhs)
            }
        }

        impl<T: Into<Rational>> $op_assign<T> for Rational {
            fn $method_assign(&mut self, rhs: T) {
                *self = $f(*self, rhs.into());
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_ratio);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_ratio);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_ratio);
impl_binary_op!(Div, div, DivAssign, div_assign, div_or_panic);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        neg_ratio(self)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        neg_ratio(*self)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::from(0), add_ratio)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::from(0), |acc, r| add_ratio(acc, *r))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::from(1), mul_ratio)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::from(1), |acc, r| mul_ratio(acc, *r))
    }
}
