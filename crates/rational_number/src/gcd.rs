use crate::Rational;
use log::trace;
use rational_test::rational_assert;

// Euclidean algorithm. `gcd(0, x)` is `x`.
pub(crate) fn gcd(x1: u32, x2: u32) -> u32 {
    let (mut a, mut b) = if x1 >= x2 { (x1, x2) } else { (x2, x1) };

    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

impl Rational {
    // It doesn't touch the sign of `denom`: `2/-4` becomes `1/-2`, not `-1/2`.
    pub(crate) fn reduce(self) -> Rational {
        let r = gcd(self.denom.unsigned_abs(), self.numer.unsigned_abs());

        if r == 1 {
            return self;
        }

        trace!("reducing {}/{} by {r}", self.numer, self.denom);

        // `r` doesn't fit in i32 only if `denom` is `i32::MIN` and `numer` is 0 or `i32::MIN`.
        // `r as i32` is `i32::MIN` then, which still divides both correctly.
        let r = r as i32;
        let result = Rational::from_raw_parts(self.numer / r, self.denom / r);

        rational_assert!(
            rational_test::is_reduced(result.numer, result.denom),
            "{}/{} is not reduced",
            result.numer,
            result.denom,
        );

        result
    }
}
