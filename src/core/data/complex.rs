use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Linear interpolation towards `other`, exact at `t == 0.0` and `t == 1.0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            real: lerp(self.real, other.real, t),
            imag: lerp(self.imag, other.imag, t),
        }
    }
}

/// Moves `t` of the way from `start` to `end`. Exact at `t == 0.0` and
/// `t == 1.0`, and returns `start` unchanged whenever `start == end`.
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    if start == end {
        start
    } else if t == 1.0 {
        end
    } else {
        start + (end - start) * t
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
