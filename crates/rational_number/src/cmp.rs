use crate::Rational;
use crate::op::sub_ratio;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Rational {
    // Every comparison is built on this: the numerator of the (reduced) `self - other`.
    // `denom` is not sign-normalized, so a difference whose denominator is negative
    // reports the opposite sign of its actual value.
    fn compare_numer(self, other: Rational) -> i32 {
        sub_ratio(self, other).numer
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.compare_numer(*other) == 0
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Rational) -> bool {
        other.compare_numer(*self) > 0
    }

    fn le(&self, other: &Rational) -> bool {
        other.compare_numer(*self) >= 0
    }

    fn gt(&self, other: &Rational) -> bool {
        self.compare_numer(*other) > 0
    }

    fn ge(&self, other: &Rational) -> bool {
        self.compare_numer(*other) >= 0
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        self.compare_numer(*other).cmp(&0)
    }
}

impl PartialEq<i32> for Rational {
    fn eq(&self, other: &i32) -> bool {
        *self == Rational::from(*other)
    }
}

impl PartialEq<Rational> for i32 {
    fn eq(&self, other: &Rational) -> bool {
        Rational::from(*self) == *other
    }
}

impl PartialOrd<i32> for Rational {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.partial_cmp(&Rational::from(*other))
    }
}

impl PartialOrd<Rational> for i32 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Rational::from(*self).partial_cmp(other)
    }
}

// Equal values must have the same hash, but `1/2` and `-1/-2` are equal and reduce
// to different pairs. So it hashes the reduced pair with a positive denominator.
// It's widened to i64 so that flipping the sign of `i32::MIN` doesn't overflow.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        let (mut numer, mut denom) = (reduced.numer as i64, reduced.denom as i64);

        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }

        numer.hash(state);
        denom.hash(state);
    }
}
