#![deny(unused_imports)]

//! Exact rational numbers over `i32`.
//!
//! ```
//! use rational::Rational;
//!
//! let a = Rational::new(1, 2).unwrap();
//! let b = Rational::new(1, 3).unwrap();
//!
//! assert_eq!(a + b, Rational::new(5, 6).unwrap());
//! assert!(a < Rational::new(2, 3).unwrap());
//! assert_eq!(i32::from(Rational::new(7, 2).unwrap()), 3);
//! ```

pub use rational_number::{RatioError, Rational};
