use crate::Rational;

impl Rational {
    /// Truncates toward zero: `7/2` is 3, `-7/2` is -3.
    pub fn to_int(&self) -> i32 {
        self.numer / self.denom
    }

    pub fn to_f32(&self) -> f32 {
        self.numer as f32 / self.denom as f32
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl From<Rational> for i32 {
    fn from(r: Rational) -> i32 {
        r.to_int()
    }
}

impl From<Rational> for f32 {
    fn from(r: Rational) -> f32 {
        r.to_f32()
    }
}

impl From<Rational> for f64 {
    fn from(r: Rational) -> f64 {
        r.to_f64()
    }
}
