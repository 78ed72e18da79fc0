//! Periodicity of discrete complex sinusoids
//!
//! x[n] = e^(jωn) is periodic with period N iff ωN = 2πk for some integer k,
//! i.e. iff ω/2π is rational. Rationality of a float is tested by walking
//! the continued-fraction convergents of ω/2π up to a denominator bound.
//!
//! With the default bound (10 000) and tolerance (1e-9), every p/q that meets
//! the tolerance also satisfies |x - p/q| < 1/(2q²), so by Legendre's theorem
//! it is a convergent and the walk cannot miss it. Larger bounds keep
//! working but may skip a semiconvergent that would have matched.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AnalysisConfig, DspError, DspResult, DEFAULT_MAX_DENOMINATOR, DEFAULT_TOLERANCE,
};

/// Beyond 2^52 consecutive floats are more than one unit apart
const MAX_RESOLVABLE: f64 = 4_503_599_627_370_496.0;

/// Periodicity classification of e^(jωn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodicityResult {
    /// ω·N = 2π·k with gcd(|k|, N) = 1
    Periodic {
        fundamental_period: u64,
        harmonic_index: i64,
    },
    NonPeriodic,
}

impl PeriodicityResult {
    pub fn is_periodic(&self) -> bool {
        matches!(self, Self::Periodic { .. })
    }

    pub fn fundamental_period(&self) -> Option<u64> {
        match self {
            Self::Periodic {
                fundamental_period, ..
            } => Some(*fundamental_period),
            Self::NonPeriodic => None,
        }
    }
}

/// Continued-fraction convergents h/k of a real number, in order.
///
/// Denominators are positive and never decrease.
/// Iteration ends when the expansion terminates or a term no longer fits.
pub struct Convergents {
    remainder: f64,
    h: (i128, i128),
    k: (i128, i128),
    done: bool,
}

impl Convergents {
    pub fn new(x: f64) -> Self {
        Self {
            remainder: x,
            // (previous, one before previous)
            h: (1, 0),
            k: (0, 1),
            done: !x.is_finite(),
        }
    }
}

impl Iterator for Convergents {
    type Item = (i128, i128);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let term = self.remainder.floor();
        if term.abs() > MAX_RESOLVABLE {
            self.done = true;
            return None;
        }
        let a = term as i128;
        let next = a
            .checked_mul(self.h.0)
            .and_then(|v| v.checked_add(self.h.1))
            .zip(a.checked_mul(self.k.0).and_then(|v| v.checked_add(self.k.1)));
        let Some((h, k)) = next else {
            self.done = true;
            return None;
        };

        self.h = (h, self.h.0);
        self.k = (k, self.k.0);

        let frac = self.remainder - term;
        if frac == 0.0 {
            self.done = true;
        } else {
            self.remainder = 1.0 / frac;
        }
        Some((h, k))
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Bounded rational search for the period of e^(jωn)
#[derive(Debug, Clone, Copy)]
pub struct PeriodicityAnalyzer {
    max_denominator: u64,
    tolerance: f64,
}

impl Default for PeriodicityAnalyzer {
    fn default() -> Self {
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PeriodicityAnalyzer {
    pub fn new(max_denominator: u64, tolerance: f64) -> DspResult<Self> {
        if max_denominator == 0 {
            return Err(DspError::InvalidArgument(
                "max_denominator must be positive".to_string(),
            ));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(DspError::InvalidArgument(format!(
                "periodicity tolerance must be positive, got {tolerance}"
            )));
        }
        Ok(Self {
            max_denominator,
            tolerance,
        })
    }

    pub fn from_config(config: &AnalysisConfig) -> DspResult<Self> {
        Self::new(config.max_denominator, config.periodicity_tolerance)
    }

    pub fn max_denominator(&self) -> u64 {
        self.max_denominator
    }

    /// Classify e^(jωn) as periodic (with fundamental period) or not
    pub fn analyze(&self, omega: f64) -> DspResult<PeriodicityResult> {
        if !omega.is_finite() {
            return Err(DspError::InvalidArgument(format!(
                "frequency must be finite, got {omega}"
            )));
        }
        let x = omega / TAU;
        if x.abs() >= MAX_RESOLVABLE {
            return Err(DspError::InvalidArgument(format!(
                "frequency {omega} is too large to resolve a period"
            )));
        }

        let bound = i128::from(self.max_denominator);
        for (p, q) in Convergents::new(x) {
            if q > bound {
                break;
            }
            let error = (x - p as f64 / q as f64).abs();
            if error < self.tolerance {
                let g = gcd(p.unsigned_abs(), q.unsigned_abs()) as i128;
                let (k, n) = (p / g, q / g);
                log::debug!("ω = {omega}: ω/2π ≈ {k}/{n} (error {error:e})");
                return Ok(PeriodicityResult::Periodic {
                    fundamental_period: n as u64,
                    harmonic_index: i64::try_from(k).map_err(|_| {
                        DspError::InvalidArgument(format!(
                            "harmonic index for ω = {omega} does not fit in 64 bits"
                        ))
                    })?,
                });
            }
        }

        log::debug!(
            "ω = {omega}: no k/N with N <= {} within {:e}",
            self.max_denominator,
            self.tolerance
        );
        Ok(PeriodicityResult::NonPeriodic)
    }
}

/// Classify e^(jωn) with the given denominator bound and 1e-9 tolerance
pub fn analyze_periodicity(omega: f64, max_denominator: u64) -> DspResult<PeriodicityResult> {
    PeriodicityAnalyzer::new(max_denominator, DEFAULT_TOLERANCE)?.analyze(omega)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn period(omega: f64) -> Option<u64> {
        analyze_periodicity(omega, DEFAULT_MAX_DENOMINATOR)
            .unwrap()
            .fundamental_period()
    }

    #[test]
    fn pi_over_four_has_period_eight() {
        assert_eq!(
            analyze_periodicity(PI / 4.0, 10_000).unwrap(),
            PeriodicityResult::Periodic {
                fundamental_period: 8,
                harmonic_index: 1
            }
        );
    }

    #[test]
    fn one_radian_is_not_periodic() {
        assert_eq!(
            analyze_periodicity(1.0, 10_000).unwrap(),
            PeriodicityResult::NonPeriodic
        );
    }

    #[test]
    fn rational_multiples_of_tau() {
        assert_eq!(period(TAU / 16.0), Some(16));
        assert_eq!(period(TAU / 8.0), Some(8));
        assert_eq!(period(TAU / 4.0), Some(4));
        assert_eq!(period(PI / 3.0), Some(6));
        assert_eq!(period(PI / 2.0), Some(4));
        assert_eq!(period(PI), Some(2));
        assert_eq!(period(2.0 * PI / 3.0), Some(3));
        assert_eq!(period(PI * 2f64.sqrt() / 2.0), None);
    }

    #[test]
    fn zero_frequency_is_constant() {
        assert_eq!(
            analyze_periodicity(0.0, 1).unwrap(),
            PeriodicityResult::Periodic {
                fundamental_period: 1,
                harmonic_index: 0
            }
        );
    }

    #[test]
    fn negative_and_aliased_frequencies_keep_the_period() {
        assert_eq!(
            analyze_periodicity(-PI / 4.0, 100).unwrap(),
            PeriodicityResult::Periodic {
                fundamental_period: 8,
                harmonic_index: -1
            }
        );
        assert_eq!(
            analyze_periodicity(PI / 4.0 + TAU, 100).unwrap(),
            PeriodicityResult::Periodic {
                fundamental_period: 8,
                harmonic_index: 9
            }
        );
    }

    #[test]
    fn small_bound_turns_periodic_into_non_periodic() {
        assert_eq!(
            analyze_periodicity(TAU / 16.0, 8).unwrap(),
            PeriodicityResult::NonPeriodic
        );
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(matches!(
            analyze_periodicity(1.0, 0),
            Err(DspError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyze_periodicity(f64::NAN, 10),
            Err(DspError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyze_periodicity(f64::INFINITY, 10),
            Err(DspError::InvalidArgument(_))
        ));
    }

    #[test]
    fn convergents_of_pi() {
        let first: Vec<_> = Convergents::new(PI).take(4).collect();
        assert_eq!(first, vec![(3, 1), (22, 7), (333, 106), (355, 113)]);
    }

    #[test]
    fn convergents_terminate_for_exact_fractions() {
        let all: Vec<_> = Convergents::new(0.125).collect();
        assert_eq!(all, vec![(0, 1), (1, 8)]);
    }

    #[test]
    fn convergents_pass_through_nearby_fraction() {
        assert!(Convergents::new(0.375).any(|c| c == (3, 8)));
    }
}
