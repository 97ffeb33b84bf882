#![deny(unused_imports)]

// set it to false when you want to disable the invariant checks
// they're only checked in debug builds anyway
pub const CHECK_INVARIANTS: bool = true;

#[macro_export]
macro_rules! rational_assert {
    ($($x: expr),* $(,)?) => {
        if $crate::CHECK_INVARIANTS && cfg!(debug_assertions) {
            assert!($($x),*);
        }
    };
}

#[macro_export]
macro_rules! rational_assert_eq {
    ($($x: expr),* $(,)?) => {
        if $crate::CHECK_INVARIANTS && cfg!(debug_assertions) {
            assert_eq!($($x),*);
        }
    };
}

/// `gcd(|numer|, |denom|) == 1`
///
/// It doesn't use the gcd implementation of `rational_number`, so that tests can use this as an oracle.
pub fn is_reduced(numer: i32, denom: i32) -> bool {
    let mut a = numer.unsigned_abs() as u64;
    let mut b = denom.unsigned_abs() as u64;

    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a == 1
}
