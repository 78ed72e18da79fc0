//! Core domain types

use std::f64::consts::{PI, TAU};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Discrete time index n
pub type SampleIndex = i64;

/// A value a discrete signal can hold at one index.
///
/// Implemented for real (`f64`) and complex (`Complex64`) samples. Only the
/// arithmetic needed for reflection-based decomposition is required; complex
/// values are never conjugated.
pub trait Sample:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;

    /// Absolute value |x|
    fn magnitude(&self) -> f64;
}

impl Sample for f64 {
    fn zero() -> Self {
        0.0
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }
}

impl Sample for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn magnitude(&self) -> f64 {
        self.norm()
    }
}

/// Angular frequency in radians per sample
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Frequency(pub f64);

impl Frequency {
    pub fn radians(omega: f64) -> Self {
        Self(omega)
    }

    /// ω = 2πk/N
    pub fn harmonic(k: i64, n: u64) -> Self {
        Self(TAU * k as f64 / n as f64)
    }

    pub fn as_radians(&self) -> f64 {
        self.0
    }

    /// ω / 2π, the frequency in cycles per sample
    pub fn cycles_per_sample(&self) -> f64 {
        self.0 / TAU
    }

    /// Reduce into [-π, π)
    pub fn wrapped(&self) -> Self {
        Self((self.0 + PI).rem_euclid(TAU) - PI)
    }

    /// Reduce into [0, 2π)
    pub fn wrapped_positive(&self) -> Self {
        Self(self.0.rem_euclid(TAU))
    }

    /// Frequency shifted by m whole turns: ω + 2πm
    pub fn alias(&self, m: i64) -> Self {
        Self(self.0 + TAU * m as f64)
    }
}

impl From<f64> for Frequency {
    fn from(omega: f64) -> Self {
        Self(omega)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_lands_in_symmetric_range() {
        for &omega in &[-7.0, -PI, -1.0, 0.0, 1.0, PI, 3.0 * PI, 10.0] {
            let w = Frequency::radians(omega).wrapped().as_radians();
            assert!((-PI..PI).contains(&w), "{omega} wrapped to {w}");
            let turns = (omega - w) / TAU;
            assert!((turns - turns.round()).abs() < 1e-12);
        }
    }

    #[test]
    fn pi_wraps_to_minus_pi() {
        let w = Frequency::radians(PI).wrapped().as_radians();
        assert!((w + PI).abs() < 1e-12);
    }

    #[test]
    fn wrapped_positive_lands_in_one_turn() {
        let w = Frequency::radians(-PI / 6.0).wrapped_positive().as_radians();
        assert!((w - (TAU - PI / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn harmonic_builds_rational_multiple_of_tau() {
        let f = Frequency::harmonic(1, 8);
        assert!((f.as_radians() - PI / 4.0).abs() < 1e-15);
        assert!((f.cycles_per_sample() - 0.125).abs() < 1e-15);
    }

    #[test]
    fn complex_magnitude_is_modulus() {
        let c = Complex64::new(3.0, 4.0);
        assert_eq!(Sample::magnitude(&c), 5.0);
        assert_eq!(Sample::magnitude(&-2.5f64), 2.5);
    }
}
