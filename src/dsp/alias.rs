//! Aliasing and frequency resolution
//!
//! e^(j(ω+2πm)n) = e^(jωn)·e^(j2πmn) = e^(jωn) for every integer n, so all
//! frequencies ω + 2πm describe the same discrete sequence.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::domain::{DspError, DspResult, Frequency, SampleIndex};

/// One frequency of an alias set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AliasMember {
    /// Number of whole turns added to the base frequency
    pub turns: i64,
    pub frequency: Frequency,
}

/// Frequencies {ω + 2πm : m in range}, all producing the same sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSet {
    pub base: Frequency,
    pub members: Vec<AliasMember>,
}

impl AliasSet {
    pub fn frequencies(&self) -> impl Iterator<Item = Frequency> + '_ {
        self.members.iter().map(|m| m.frequency)
    }

    /// Largest |e^(jωn) - e^(jω'n)| between the base and any member over
    /// `n_range`. Zero in exact arithmetic; only rounding of 2π shows up.
    pub fn max_deviation(&self, n_range: RangeInclusive<SampleIndex>) -> f64 {
        let base = self.base.as_radians();
        self.members
            .iter()
            .flat_map(|member| {
                let omega = member.frequency.as_radians();
                n_range.clone().map(move |n| {
                    let n = n as f64;
                    (Complex64::cis(base * n) - Complex64::cis(omega * n)).norm()
                })
            })
            .fold(0.0, f64::max)
    }
}

/// {ω + two_pi·m : m in range}. No approximation beyond float rounding.
pub fn compute_alias_set_with_period(
    omega: f64,
    range: RangeInclusive<i64>,
    two_pi: f64,
) -> AliasSet {
    let members = range
        .map(|m| AliasMember {
            turns: m,
            frequency: Frequency::radians(omega + two_pi * m as f64),
        })
        .collect();
    AliasSet {
        base: Frequency::radians(omega),
        members,
    }
}

/// {ω + 2πm : m in range}
pub fn compute_alias_set(omega: f64, range: RangeInclusive<i64>) -> AliasSet {
    compute_alias_set_with_period(omega, range, TAU)
}

/// Smallest distinguishable frequency spacing 2π/L for an L-sample window
pub fn frequency_resolution(observation_length: i64) -> DspResult<f64> {
    if observation_length <= 0 {
        return Err(DspError::InvalidArgument(format!(
            "observation length must be positive, got {observation_length}"
        )));
    }
    Ok(TAU / observation_length as f64)
}
