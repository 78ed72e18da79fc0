//! Indexed discrete-time signals
//!
//! A signal is an explicit index → value mapping. Array position and signal
//! index n are never conflated: n may start anywhere, including negative
//! values.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::domain::{DspError, DspResult, Sample, SampleIndex};

/// Anything the decomposer can read samples from.
///
/// `domain` lists the indices the result is defined on, ascending. `at`
/// returns `None` when the signal cannot supply a value for `n`.
pub trait SignalSource<T: Sample> {
    fn domain(&self) -> Vec<SampleIndex>;

    fn at(&self, n: SampleIndex) -> Option<T>;
}

/// Finite signal with unique, ascending indices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexedSignal<T> {
    samples: BTreeMap<SampleIndex, T>,
}

impl<T: Sample> IndexedSignal<T> {
    /// Build from (index, value) pairs. Duplicate indices are rejected.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (SampleIndex, T)>) -> DspResult<Self> {
        let mut samples = BTreeMap::new();
        for (n, value) in pairs {
            if samples.insert(n, value).is_some() {
                return Err(DspError::InvalidArgument(format!(
                    "duplicate sample index {n}"
                )));
            }
        }
        Ok(Self { samples })
    }

    /// Contiguous values where the first one sits at index `start`
    pub fn from_samples(start: SampleIndex, values: impl IntoIterator<Item = T>) -> Self {
        let samples = (start..).zip(values).collect();
        Self { samples }
    }

    /// Evaluate `f` at every index of `range`
    pub fn from_fn(range: RangeInclusive<SampleIndex>, f: impl Fn(SampleIndex) -> T) -> Self {
        let samples = range.map(|n| (n, f(n))).collect();
        Self { samples }
    }

    pub fn get(&self, n: SampleIndex) -> Option<T> {
        self.samples.get(&n).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = SampleIndex> + '_ {
        self.samples.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SampleIndex, T)> + '_ {
        self.samples.iter().map(|(&n, &v)| (n, v))
    }

    /// True when every index n has its mirror -n in the domain
    pub fn is_symmetric(&self) -> bool {
        self.samples.keys().all(|n| self.samples.contains_key(&-n))
    }

    /// Re-index an odd-length signal so its middle sample lands at n = 0.
    ///
    /// The value at array position i moves to n = i - len/2, whatever its
    /// current index was.
    pub fn recentered(&self) -> DspResult<Self> {
        let len = self.len();
        if len % 2 == 0 {
            return Err(DspError::InvalidArgument(format!(
                "cannot centre a signal of even length {len}"
            )));
        }
        let half = (len / 2) as SampleIndex;
        Ok(Self::from_samples(-half, self.values()))
    }

    /// Extend the domain to the contiguous range -M..=M, M = max |n|, filling
    /// every index that was not defined with zero.
    pub fn zero_extended(&self) -> Self {
        let Some(reach) = self.indices().map(|n| n.saturating_abs()).max() else {
            return self.clone();
        };
        Self::from_fn(-reach..=reach, |n| self.get(n).unwrap_or_else(T::zero))
    }

    pub fn map<U: Sample>(&self, f: impl Fn(T) -> U) -> IndexedSignal<U> {
        IndexedSignal {
            samples: self.samples.iter().map(|(&n, &v)| (n, f(v))).collect(),
        }
    }

    /// Largest |self[n] - other[n]| over the indices of `self`.
    ///
    /// An index missing from `other` counts as an infinite difference.
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        self.iter()
            .map(|(n, v)| match other.get(n) {
                Some(w) => (v - w).magnitude(),
                None => f64::INFINITY,
            })
            .fold(0.0, f64::max)
    }
}

impl<T: Sample> FromIterator<(SampleIndex, T)> for IndexedSignal<T> {
    /// Later duplicates overwrite earlier ones; use `from_pairs` to reject them.
    fn from_iter<I: IntoIterator<Item = (SampleIndex, T)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<T: Sample> SignalSource<T> for IndexedSignal<T> {
    fn domain(&self) -> Vec<SampleIndex> {
        self.indices().collect()
    }

    fn at(&self, n: SampleIndex) -> Option<T> {
        self.get(n)
    }
}

/// Signal given by a formula defined for every integer n, observed over
/// `domain`. Reflection just substitutes -n into the formula.
pub struct ClosedForm<F> {
    domain: RangeInclusive<SampleIndex>,
    eval: F,
}

impl<T, F> ClosedForm<F>
where
    T: Sample,
    F: Fn(SampleIndex) -> T,
{
    pub fn new(domain: RangeInclusive<SampleIndex>, eval: F) -> Self {
        Self { domain, eval }
    }

    pub fn eval(&self, n: SampleIndex) -> T {
        (self.eval)(n)
    }

    /// Finite samples over the observation domain
    pub fn sampled(&self) -> IndexedSignal<T> {
        IndexedSignal::from_fn(self.domain.clone(), &self.eval)
    }
}

impl<T, F> SignalSource<T> for ClosedForm<F>
where
    T: Sample,
    F: Fn(SampleIndex) -> T,
{
    fn domain(&self) -> Vec<SampleIndex> {
        self.domain.clone().collect()
    }

    fn at(&self, n: SampleIndex) -> Option<T> {
        Some((self.eval)(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_samples_assigns_consecutive_indices() {
        let x = IndexedSignal::from_samples(-2, [1.0, 2.0, 3.0]);
        assert_eq!(x.domain(), vec![-2, -1, 0]);
        assert_eq!(x.get(-1), Some(2.0));
        assert_eq!(x.get(1), None);
    }

    #[test]
    fn from_pairs_sorts_and_rejects_duplicates() {
        let x = IndexedSignal::from_pairs([(3, 1.0), (-1, 2.0)]).unwrap();
        assert_eq!(x.domain(), vec![-1, 3]);

        let err = IndexedSignal::from_pairs([(0, 1.0), (0, 2.0)]).unwrap_err();
        assert!(matches!(err, DspError::InvalidArgument(_)));
    }

    #[test]
    fn recentered_maps_middle_sample_to_zero() {
        let x = IndexedSignal::from_samples(0, [2.0, 1.0, -1.0, 3.0, 2.0]);
        let centred = x.recentered().unwrap();
        assert_eq!(centred.domain(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(centred.get(0), Some(-1.0));
        assert_eq!(centred.get(-2), Some(2.0));
        assert!(centred.is_symmetric());
    }

    #[test]
    fn recentered_rejects_even_length() {
        let x = IndexedSignal::from_samples(0, [1.0, 2.0]);
        assert!(x.recentered().is_err());
    }

    #[test]
    fn zero_extended_mirrors_domain_with_zeros() {
        let x = IndexedSignal::from_samples(0, [1.0, 0.8, 0.64]);
        assert!(!x.is_symmetric());

        let ext = x.zero_extended();
        assert_eq!(ext.domain(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(ext.get(-2), Some(0.0));
        assert_eq!(ext.get(2), Some(0.64));
        assert!(ext.is_symmetric());
    }

    #[test]
    fn closed_form_answers_any_index() {
        let x = ClosedForm::new(0..=3, |n: i64| n as f64 * 2.0);
        assert_eq!(x.domain(), vec![0, 1, 2, 3]);
        assert_eq!(x.at(-7), Some(-14.0));
        assert_eq!(x.sampled().len(), 4);
    }

    #[test]
    fn max_abs_difference_flags_missing_indices() {
        let a = IndexedSignal::from_samples(0, [1.0, 2.0]);
        let b = IndexedSignal::from_samples(0, [1.0, 2.5]);
        assert_eq!(a.max_abs_difference(&b), 0.5);

        let short = IndexedSignal::from_samples(0, [1.0]);
        assert_eq!(a.max_abs_difference(&short), f64::INFINITY);
    }
}
