//! Even/odd decomposition
//!
//! Any sequence splits uniquely into
//!
//! ```text
//! x_e[n] = (x[n] + x[-n]) / 2      even:  x_e[n] =  x_e[-n]
//! x_o[n] = (x[n] - x[-n]) / 2      odd:   x_o[n] = -x_o[-n]
//! ```
//!
//! and x[n] = x_e[n] + x_o[n]. Complex signals are reflected in the index
//! only; no conjugate is taken.
//!
//! Each half is scaled before summing, so samples near `f64::MAX` do not
//! overflow. The reconstruction check is relative: at index n the error may
//! reach `tolerance * max(1, |x[n]|, |x[-n]|)`, which keeps large-magnitude
//! signals from failing on rounding alone.

use crate::domain::{AnalysisConfig, DspError, DspResult, Sample, DEFAULT_TOLERANCE};

use super::signal::{IndexedSignal, SignalSource};

/// Output of a decomposition, all parts sharing the input's domain
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionResult<T> {
    pub original: IndexedSignal<T>,
    pub even: IndexedSignal<T>,
    pub odd: IndexedSignal<T>,
    pub reconstruction: IndexedSignal<T>,
    /// max_n |reconstruction[n] - x[n]|
    pub max_error: f64,
    /// max_n |reconstruction[n] - x[n]| / max(1, |x[n]|, |x[-n]|)
    pub max_relative_error: f64,
    pub verified: bool,
}

/// Splits signals into even and odd parts and checks the reconstruction
#[derive(Debug, Clone, Copy)]
pub struct EvenOddDecomposer {
    tolerance: f64,
}

impl Default for EvenOddDecomposer {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl EvenOddDecomposer {
    pub fn new(tolerance: f64) -> DspResult<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(DspError::InvalidArgument(format!(
                "reconstruction tolerance must be positive, got {tolerance}"
            )));
        }
        Ok(Self { tolerance })
    }

    pub fn from_config(config: &AnalysisConfig) -> DspResult<Self> {
        Self::new(config.reconstruction_tolerance)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Decompose `signal` over its own domain.
    ///
    /// Fails with `IndexDomain` if some x[-n] cannot be evaluated, and with
    /// `InvalidArgument` on a non-finite sample.
    pub fn decompose<T, S>(&self, signal: &S) -> DspResult<DecompositionResult<T>>
    where
        T: Sample,
        S: SignalSource<T> + ?Sized,
    {
        let domain = signal.domain();
        let mut original = Vec::with_capacity(domain.len());
        let mut even = Vec::with_capacity(domain.len());
        let mut odd = Vec::with_capacity(domain.len());
        let mut scales = Vec::with_capacity(domain.len());

        for &n in &domain {
            let x = Self::sample(signal, n)?;
            let mirrored = n
                .checked_neg()
                .ok_or(DspError::IndexDomain { index: n })?;
            let x_reflected = Self::sample(signal, mirrored)?;

            let (half, half_reflected) = (x * 0.5, x_reflected * 0.5);
            original.push((n, x));
            even.push((n, half + half_reflected));
            odd.push((n, half - half_reflected));
            scales.push(x.magnitude().max(x_reflected.magnitude()).max(1.0));
        }

        let original: IndexedSignal<T> = original.into_iter().collect();
        let even: IndexedSignal<T> = even.into_iter().collect();
        let odd: IndexedSignal<T> = odd.into_iter().collect();
        let reconstruction: IndexedSignal<T> = even
            .iter()
            .zip(odd.values())
            .map(|((n, e), o)| (n, e + o))
            .collect();

        let errors: Vec<f64> = reconstruction
            .values()
            .zip(original.values())
            .map(|(r, x)| (r - x).magnitude())
            .collect();
        let max_error = errors.iter().copied().fold(0.0, f64::max);
        let max_relative_error = errors
            .iter()
            .zip(&scales)
            .map(|(e, scale)| e / scale)
            .fold(0.0, f64::max);
        log::debug!(
            "Decomposed {} samples, reconstruction error {max_error:e} (relative {max_relative_error:e})",
            original.len()
        );

        // Negated comparison so a NaN error also fails
        if !(max_relative_error <= self.tolerance) {
            return Err(DspError::Reconstruction {
                max_error,
                tolerance: self.tolerance,
            });
        }

        Ok(DecompositionResult {
            original,
            even,
            odd,
            reconstruction,
            max_error,
            max_relative_error,
            verified: true,
        })
    }

    fn sample<T, S>(signal: &S, n: i64) -> DspResult<T>
    where
        T: Sample,
        S: SignalSource<T> + ?Sized,
    {
        let value = signal.at(n).ok_or(DspError::IndexDomain { index: n })?;
        if !value.magnitude().is_finite() {
            return Err(DspError::InvalidArgument(format!(
                "sample x[{n}] is not finite: {value:?}"
            )));
        }
        Ok(value)
    }
}

/// Decompose with the default 1e-9 reconstruction tolerance
pub fn decompose<T, S>(signal: &S) -> DspResult<DecompositionResult<T>>
where
    T: Sample,
    S: SignalSource<T> + ?Sized,
{
    EvenOddDecomposer::default().decompose(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::signal::ClosedForm;
    use num_complex::Complex64;

    #[test]
    fn arbitrary_signal_recentered() {
        let x = IndexedSignal::from_samples(0, [2.0, 1.0, -1.0, 3.0, 2.0])
            .recentered()
            .unwrap();
        let result = decompose(&x).unwrap();

        assert_eq!(result.even.get(0), Some(-1.0));
        assert_eq!(result.odd.get(0), Some(0.0));
        // x[-2] = 2, x[2] = 2
        assert_eq!(result.even.get(2), Some(2.0));
        assert_eq!(result.odd.get(2), Some(0.0));
        // x[-1] = 1, x[1] = 3
        assert_eq!(result.even.get(1), Some(2.0));
        assert_eq!(result.odd.get(1), Some(1.0));
        assert_eq!(result.odd.get(-1), Some(-1.0));
        assert!(result.verified);
        assert!(result.max_error <= 1e-9);
    }

    #[test]
    fn asymmetric_array_fails_with_missing_index() {
        let x = IndexedSignal::from_samples(0, [1.0, 2.0, 3.0]);
        let err = decompose(&x).unwrap_err();
        assert_eq!(err, DspError::IndexDomain { index: -1 });
    }

    #[test]
    fn zero_extension_makes_causal_signal_decomposable() {
        let x = IndexedSignal::from_samples(0, [1.0, 0.5, 0.25]).zero_extended();
        let result = decompose(&x).unwrap();
        assert_eq!(result.even.get(-2), Some(0.125));
        assert_eq!(result.odd.get(-2), Some(-0.125));
        assert_eq!(result.even.get(0), Some(1.0));
    }

    #[test]
    fn closed_form_reflects_outside_observed_domain() {
        // Only n >= 0 is observed, the formula supplies x[-n]
        let x = ClosedForm::new(0..=4, |n: i64| n as f64);
        let result = decompose(&x).unwrap();
        assert_eq!(result.even.get(3), Some(0.0));
        assert_eq!(result.odd.get(3), Some(3.0));
        assert_eq!(result.original.len(), 5);
    }

    #[test]
    fn sine_is_purely_odd() {
        let omega = std::f64::consts::PI / 4.0;
        let x = ClosedForm::new(-5..=5, move |n: i64| (omega * n as f64).sin());
        let result = decompose(&x).unwrap();
        assert!(result.even.values().all(|e| e.abs() < 1e-12));
        let x = x.sampled();
        assert!(result.odd.max_abs_difference(&x) < 1e-12);
    }

    #[test]
    fn complex_signal_is_not_conjugated() {
        let x = IndexedSignal::from_pairs([
            (-1, Complex64::new(0.0, 1.0)),
            (0, Complex64::new(1.0, 1.0)),
            (1, Complex64::new(0.0, 3.0)),
        ])
        .unwrap();
        let result = decompose(&x).unwrap();
        assert_eq!(result.even.get(1), Some(Complex64::new(0.0, 2.0)));
        assert_eq!(result.odd.get(1), Some(Complex64::new(0.0, 1.0)));
        assert_eq!(result.even.get(0), Some(Complex64::new(1.0, 1.0)));
    }

    #[test]
    fn empty_signal_decomposes_to_nothing() {
        let x: IndexedSignal<f64> = IndexedSignal::default();
        let result = decompose(&x).unwrap();
        assert!(result.even.is_empty());
        assert!(result.verified);
    }

    #[test]
    fn non_finite_sample_is_rejected() {
        let x = IndexedSignal::from_samples(-1, [1.0, f64::NAN, 1.0]);
        assert!(matches!(
            decompose(&x),
            Err(DspError::InvalidArgument(_))
        ));
    }

    #[test]
    fn large_magnitudes_pass_the_relative_check() {
        let x = IndexedSignal::from_samples(-1, [0.3, 0.0, 1e10 + 0.7]);
        let result = decompose(&x).unwrap();
        assert!(result.verified);
        assert!(result.max_relative_error <= 1e-9);
        assert!((result.even.get(1).unwrap() - (5e9 + 0.5)).abs() < 1e-5);
    }

    #[test]
    fn samples_near_max_do_not_overflow() {
        let x = IndexedSignal::from_samples(-1, [1e308, 0.0, 1e308]);
        let result = decompose(&x).unwrap();
        assert_eq!(result.even.get(1), Some(1e308));
        assert_eq!(result.odd.get(1), Some(0.0));

        let x = IndexedSignal::from_samples(-1, [f64::MAX, 1.0, -f64::MAX]);
        let result = decompose(&x).unwrap();
        assert_eq!(result.even.get(-1), Some(0.0));
        assert_eq!(result.odd.get(-1), Some(f64::MAX));
        assert_eq!(result.reconstruction.get(1), Some(-f64::MAX));
    }

    #[test]
    fn decomposer_rejects_bad_tolerance() {
        assert!(EvenOddDecomposer::new(0.0).is_err());
        assert!(EvenOddDecomposer::new(f64::NAN).is_err());
        assert_eq!(EvenOddDecomposer::new(1e-6).unwrap().tolerance(), 1e-6);
    }
}
