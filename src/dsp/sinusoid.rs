//! Discrete complex sinusoids e^(jωn)

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use num_complex::Complex64;

use crate::domain::{Frequency, SampleIndex};

use super::signal::IndexedSignal;

/// Sequence x[n] = e^(jωn) = cos(ωn) + j·sin(ωn)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexSinusoid {
    frequency: Frequency,
}

impl ComplexSinusoid {
    pub fn new(frequency: impl Into<Frequency>) -> Self {
        Self {
            frequency: frequency.into(),
        }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Evaluate one sample directly from ωn
    pub fn at(&self, n: SampleIndex) -> Complex64 {
        Complex64::cis(self.frequency.as_radians() * n as f64)
    }

    pub fn samples(&self, range: RangeInclusive<SampleIndex>) -> IndexedSignal<Complex64> {
        IndexedSignal::from_fn(range, |n| self.at(n))
    }

    /// cos(ωn)
    pub fn real_part(&self, range: RangeInclusive<SampleIndex>) -> IndexedSignal<f64> {
        self.samples(range).map(|c| c.re)
    }

    /// sin(ωn)
    pub fn imag_part(&self, range: RangeInclusive<SampleIndex>) -> IndexedSignal<f64> {
        self.samples(range).map(|c| c.im)
    }

    /// |e^(jωn)|, identically 1 up to rounding
    pub fn magnitude(&self, range: RangeInclusive<SampleIndex>) -> IndexedSignal<f64> {
        self.samples(range).map(|c| c.norm())
    }

    /// ∠e^(jωn), i.e. ωn wrapped into (-π, π]
    pub fn phase(&self, range: RangeInclusive<SampleIndex>) -> IndexedSignal<f64> {
        self.samples(range).map(|c| {
            let arg = c.arg();
            if arg <= -PI {
                arg + 2.0 * PI
            } else {
                arg
            }
        })
    }
}

/// Multiples of `period` strictly between 0 and `len`, where period
/// boundaries get drawn on a plot of `len` samples
pub fn period_markers(period: u64, len: u64) -> Vec<u64> {
    if period == 0 {
        return Vec::new();
    }
    (1..)
        .map(|i| i * period)
        .take_while(|&p| p < len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::signal::SignalSource;

    #[test]
    fn components_follow_euler() {
        let x = ComplexSinusoid::new(PI / 4.0);
        let re = x.real_part(0..=7);
        let im = x.imag_part(0..=7);
        assert!((re.get(2).unwrap()).abs() < 1e-12);
        assert!((im.get(2).unwrap() - 1.0).abs() < 1e-12);
        assert!((re.get(4).unwrap() + 1.0).abs() < 1e-12);
        assert!(x.magnitude(0..=7).values().all(|m| (m - 1.0).abs() < 1e-12));
    }

    #[test]
    fn periodic_sinusoid_repeats_after_its_period() {
        let x = ComplexSinusoid::new(Frequency::harmonic(1, 8));
        for n in -20..20 {
            assert!((x.at(n + 8) - x.at(n)).norm() < 1e-12);
        }
    }

    #[test]
    fn phase_stays_in_half_open_interval() {
        let x = ComplexSinusoid::new(1.0);
        let phase = x.phase(0..=40);
        assert_eq!(phase.domain().len(), 41);
        assert!(phase.values().all(|p| p > -PI && p <= PI));
        assert!((phase.get(1).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn period_markers_inside_window() {
        assert_eq!(period_markers(8, 40), vec![8, 16, 24, 32]);
        assert_eq!(period_markers(8, 33), vec![8, 16, 24, 32]);
        assert_eq!(period_markers(50, 40), Vec::<u64>::new());
        assert!(period_markers(0, 40).is_empty());
    }
}
