use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_REAL: f64 = 2.0;
const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;

/// Condition that keeps a point iterating.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EscapeTest {
    /// Keep going while `re(z) < 2`. Points whose orbit leaves through the
    /// left or along the imaginary axis are never counted as escaped, so
    /// boundary classification differs from the textbook test.
    #[default]
    RealPart,
    /// Keep going while `|z| <= 2`.
    Modulus,
}

impl EscapeTest {
    #[inline]
    fn keeps_iterating(self, z: Complex) -> bool {
        match self {
            Self::RealPart => z.real < ESCAPE_REAL,
            Self::Modulus => z.magnitude_squared() <= ESCAPE_MAGNITUDE_SQUARED,
        }
    }
}

/// Iterates `z -> z² + c` from `z = 0` and returns how many steps ran before
/// the escape test failed, capped at `max_iterations`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32, escape_test: EscapeTest) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && escape_test.keeps_iterating(z) {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_test: EscapeTest,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_test: EscapeTest) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroIterationCap);
        }

        Ok(Self {
            max_iterations,
            escape_test,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn compute(&self, c: Complex) -> u32 {
        escape_iterations(c, self.max_iterations, self.escape_test)
    }

    #[must_use]
    pub fn is_in_set(&self, c: Complex) -> bool {
        self.compute(c) == self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 10, 256, 1000, 5000] {
            assert_eq!(escape_iterations(Complex::ZERO, max_iterations, EscapeTest::RealPart), max_iterations);
            assert_eq!(escape_iterations(Complex::ZERO, max_iterations, EscapeTest::Modulus), max_iterations);
        }
    }

    #[test]
    fn test_large_real_part_escapes_immediately() {
        let iterations = escape_iterations(c(10.0, 0.0), 1000, EscapeTest::RealPart);

        assert!(iterations < 5);
        assert_eq!(iterations, 1);
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        assert_eq!(escape_iterations(c(10.0, 0.0), 0, EscapeTest::RealPart), 0);
    }

    #[test]
    fn test_known_interior_points() {
        // -1 cycles 0, -1, 0, -1 ...; -0.5 and 0.25 converge.
        for point in [c(-1.0, 0.0), c(-0.5, 0.0), c(0.25, 0.0), c(-1.31, 0.0)] {
            assert_eq!(escape_iterations(point, 500, EscapeTest::RealPart), 500);
            assert_eq!(escape_iterations(point, 500, EscapeTest::Modulus), 500);
        }
    }

    #[test]
    fn test_real_part_test_keeps_left_escapers() {
        // -3 + 0i: z1 = -3, |z1| > 2 but re(z1) < 2; z2 = 6 escapes the real test.
        assert_eq!(escape_iterations(c(-3.0, 0.0), 100, EscapeTest::Modulus), 1);
        assert_eq!(escape_iterations(c(-3.0, 0.0), 100, EscapeTest::RealPart), 2);
    }

    #[test]
    fn test_real_part_test_misses_imaginary_escapers() {
        // 0 + 3i: z1 = 3i, z2 = -9 + 3i, z3 = 72 - 51i.
        assert_eq!(escape_iterations(c(0.0, 3.0), 100, EscapeTest::Modulus), 1);
        assert_eq!(escape_iterations(c(0.0, 3.0), 100, EscapeTest::RealPart), 3);
    }

    #[test]
    fn test_algorithm_rejects_zero_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0, EscapeTest::RealPart),
            Err(MandelbrotError::ZeroIterationCap)
        );
    }

    #[test]
    fn test_algorithm_classifies_points() {
        let algorithm = MandelbrotAlgorithm::new(100, EscapeTest::default()).unwrap();

        assert!(algorithm.is_in_set(c(-1.0, 0.0)));
        assert!(!algorithm.is_in_set(c(1.0, 0.0)));
        assert_eq!(algorithm.max_iterations(), 100);
    }
}
