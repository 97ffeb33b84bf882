use super::{random_denom, random_numer, random_rational, random_reduced};
use crate::{RatioError, Rational};
use rational_test::is_reduced;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const ITERATIONS: usize = 2000;

fn hash_of(r: &Rational) -> u64 {
    let mut hasher = DefaultHasher::new();
    r.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_and_convert_test() {
    for _ in 0..ITERATIONS {
        let numer = rand::random::<i32>();
        let mut denom = rand::random::<i32>();

        // `i32::MIN / -1` overflows
        if denom == 0 || denom == -1 {
            denom = 1;
        }

        let r = Rational::new(numer, denom).unwrap();

        assert_eq!((r.numer(), r.denom()), (numer, denom));
        assert_eq!(r.to_int(), numer / denom);
        assert_eq!(i32::from(r), numer / denom);
        assert_eq!(r.to_f32(), numer as f32 / denom as f32);
        assert_eq!(f64::from(r), numer as f64 / denom as f64);
        assert_eq!(Rational::new(numer, 0).unwrap_err(), RatioError::InvalidArgument);
    }
}

#[test]
fn division_by_zero_test() {
    for _ in 0..ITERATIONS {
        let mut denom = rand::random::<i32>();

        if denom == 0 {
            denom = 1;
        }

        let zero = Rational::new(0, denom).unwrap();
        let r = random_rational(1000);

        assert_eq!(r.checked_div(zero).unwrap_err(), RatioError::DivisionByZero);
    }
}

#[test]
fn reduce_idempotence_test() {
    for _ in 0..ITERATIONS {
        let once = random_rational(10000) * 1;
        let twice = once * 1;

        assert!(is_reduced(once.numer(), once.denom()), "{once}");
        assert_eq!((once.numer(), once.denom()), (twice.numer(), twice.denom()));
    }
}

#[test]
fn closure_test() {
    for _ in 0..ITERATIONS {
        let a = random_reduced(1000);
        let b = random_reduced(1000);

        for c in [a + b, a - b, a * b, -a, a.increment(), a.decrement()] {
            assert!(is_reduced(c.numer(), c.denom()), "{a}, {b} -> {c}");
        }

        if let Ok(c) = a.checked_div(b) {
            assert!(is_reduced(c.numer(), c.denom()), "{a} / {b} = {c}");
        }
    }
}

#[test]
fn eq_test() {
    for _ in 0..ITERATIONS {
        let numer = random_numer(1000);
        let denom = random_denom(1000);
        let scale = random_numer(1000);

        if scale == 0 {
            continue;
        }

        let a = Rational::new(numer, denom).unwrap();
        let b = Rational::new(numer * scale, denom * scale).unwrap();
        let c = Rational::new(-numer, -denom).unwrap();

        // reflexive
        assert_eq!(a, a);

        // symmetric
        assert_eq!(a, b);
        assert_eq!(b, a);

        // transitive
        assert_eq!(b, c);
        assert_eq!(a, c);

        // hash agrees with eq
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&c));

        assert_ne!(a, a + Rational::new(1, denom).unwrap());
    }
}

#[test]
fn total_order_test() {
    for _ in 0..ITERATIONS {
        let mut samples = vec![
            random_rational(1000),
            random_rational(1000),
            random_rational(1000),
        ];
        samples.sort();

        let [a, b, c] = [samples[0], samples[1], samples[2]];

        assert!(a <= b && b <= c);
        assert!(a <= c);

        if a < b && b < c {
            assert!(a < c);
        }

        assert_eq!(a < b, b > a);
        assert_eq!(a <= b, b >= a);
        assert_eq!(a == b, !(a < b) && !(b < a));
    }
}
