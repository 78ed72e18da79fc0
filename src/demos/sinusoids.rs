//! Complex sinusoid periodicity demo
//!
//! Covers the periodicity condition ω = 2πk/N, a periodic vs non-periodic
//! comparison, aliasing of ω and ω ± 2π, and the 2π/N resolution of an
//! N-sample window.

use std::f64::consts::{PI, TAU};

use crate::domain::{AnalysisConfig, DspResult, Figure, Frequency, Panel, Series};
use crate::dsp::{
    compute_alias_set, frequency_resolution, period_markers, ComplexSinusoid,
    PeriodicityAnalyzer, PeriodicityResult,
};
use crate::ports::Renderer;

use super::{render_examples, DemoSummary};

/// Samples drawn in the periodic vs non-periodic comparison
const COMPARISON_SAMPLES: u64 = 40;
/// Samples drawn in the aliasing comparison
const ALIAS_SAMPLES: u64 = 20;
/// Observation window of the frequency resolution example
const RESOLUTION_SAMPLES: u64 = 32;

fn status(result: &PeriodicityResult) -> String {
    match result.fundamental_period() {
        Some(n) => format!("Period = {n}"),
        None => "Not periodic".to_string(),
    }
}

/// Frequencies of the periodicity table with their labels
pub fn test_frequencies() -> Vec<(f64, &'static str)> {
    vec![
        (PI / 4.0, "π/4 (Periodic)"),
        (PI / 3.0, "π/3 (Periodic)"),
        (PI / 2.0, "π/2 (Periodic)"),
        (PI, "π (Periodic)"),
        (2.0 * PI / 3.0, "2π/3 (Periodic)"),
        (PI * 2f64.sqrt() / 2.0, "π√2/2 (Non-periodic)"),
        (1.0, "1.0 rad (Non-periodic)"),
    ]
}

/// Table of the periodicity classification of each test frequency
pub fn periodicity_conditions(analyzer: &PeriodicityAnalyzer) -> DspResult<Figure> {
    let mut figure = Figure::new("Complex Sinusoids Periodicity Analysis", 1);
    figure.note("A complex sinusoid x[n] = e^(jωn) is periodic if ω = 2πk/N for integers k and N");
    figure.note(format!(
        "Search bound: N <= {}",
        analyzer.max_denominator()
    ));
    for (omega, description) in test_frequencies() {
        let result = analyzer.analyze(omega)?;
        let ratio = match result {
            PeriodicityResult::Periodic {
                fundamental_period,
                harmonic_index,
            } => format!(
                "{} = {harmonic_index}/{fundamental_period}",
                Frequency::radians(omega).cycles_per_sample()
            ),
            PeriodicityResult::NonPeriodic => "N/A".to_string(),
        };
        figure.note(format!(
            "ω = {omega:.4} ({description}): {}, ω/(2π) = {ratio}",
            status(&result)
        ));
    }
    Ok(figure)
}

/// Real, imaginary, magnitude and phase of e^(jωn) over `samples` samples,
/// with period boundaries marked when the sequence is periodic
pub fn complex_sinusoid_figure(
    analyzer: &PeriodicityAnalyzer,
    omega: f64,
    samples: u64,
    title_suffix: &str,
) -> DspResult<Figure> {
    let periodicity = analyzer.analyze(omega)?;
    let x = ComplexSinusoid::new(omega);
    let range = 0..=(samples as i64 - 1);

    let markers: Vec<f64> = periodicity
        .fundamental_period()
        .filter(|&n| n <= samples)
        .map(|n| period_markers(n, samples))
        .unwrap_or_default()
        .into_iter()
        .map(|m| m as f64)
        .collect();

    let panels = [
        Panel::new("Real Part: cos(ωn)", "n (samples)", "Amplitude")
            .with_series(Series::stem("Re", &x.real_part(range.clone()))),
        Panel::new("Imaginary Part: sin(ωn)", "n (samples)", "Amplitude")
            .with_series(Series::stem("Im", &x.imag_part(range.clone()))),
        Panel::new("Magnitude: |e^(jωn)|", "n (samples)", "Magnitude")
            .with_series(Series::stem("|x|", &x.magnitude(range.clone())))
            .with_y_limits(0.0, 1.2),
        Panel::new("Phase: ∠e^(jωn) = ωn", "n (samples)", "Phase (radians)")
            .with_series(Series::stem("∠x", &x.phase(range))),
    ];

    let mut figure = Figure::new(
        format!("Complex Sinusoid: e^(j{omega:.3}n) {title_suffix}"),
        2,
    );
    for panel in panels {
        figure = figure.with_panel(panel.with_markers(markers.iter().copied()));
    }
    figure.note(format!(
        "Digital Frequency: ω = {omega:.3} rad/sample ({})",
        status(&periodicity)
    ));
    figure.note(format!(
        "ω/(2π) = {:.4}",
        Frequency::radians(omega).cycles_per_sample()
    ));
    Ok(figure)
}

/// π/6 against π/6 ± 2π: three identical sequences
pub fn aliasing_relationship(config: &AnalysisConfig) -> DspResult<Figure> {
    let base = PI / 6.0;
    let set = compute_alias_set(base, -1..=1);
    let last = ALIAS_SAMPLES as i64 - 1;
    let deviation = set.max_deviation(0..=last);

    let mut figure = Figure::new("Aliasing in Complex Sinusoids: Identical Signals", 3);
    for member in &set.members {
        let title = match member.turns {
            0 => "Base Frequency: π/6".to_string(),
            m if m > 0 => format!("Alias: π/6 + {m}·2π"),
            m => format!("Alias: π/6 - {}·2π", -m),
        };
        let x = ComplexSinusoid::new(member.frequency);
        figure = figure.with_panel(
            Panel::new(title, "n", "Real Part")
                .with_series(Series::stem("Re", &x.real_part(0..=last))),
        );
    }

    figure.note("e^(j(ω+2πk)n) = e^(jωn) * e^(j2πkn) = e^(jωn)");
    for member in &set.members {
        figure.note(format!(
            "m = {:+}: ω = {:.4} rad/sample",
            member.turns,
            member.frequency.as_radians()
        ));
    }
    figure.note(format!("Max difference |x₀[n] - x_m[n]|: {deviation:.2e}"));
    if deviation > config.alias_tolerance {
        log::warn!(
            "Alias deviation {deviation:e} exceeds tolerance {:e}",
            config.alias_tolerance
        );
    }
    Ok(figure)
}

/// Sinusoids with periods 16, 8 and 4 over a 32-sample window
pub fn frequency_resolution_figure(analyzer: &PeriodicityAnalyzer) -> DspResult<Figure> {
    let window = RESOLUTION_SAMPLES as i64;
    let resolution = frequency_resolution(window)?;

    let mut figure = Figure::new("Frequency Resolution: Different Periods", 3);
    for divisor in [16u64, 8, 4] {
        let omega = TAU / divisor as f64;
        let periodicity = analyzer.analyze(omega)?;
        let x = ComplexSinusoid::new(omega);
        let mut panel = Panel::new(
            format!("{} (ω = 2π/{divisor})", status(&periodicity)),
            "n",
            "Real Part",
        )
        .with_series(Series::stem("Re", &x.real_part(0..=window - 1)));
        if let Some(period) = periodicity.fundamental_period() {
            panel = panel.with_span(0.0, (period - 1) as f64);
        }
        figure = figure.with_panel(panel);
    }
    figure.note("The minimum resolvable frequency difference is 2π/N");
    figure.note(format!(
        "N = {window}: Δω = {resolution:.4} rad/sample"
    ));
    Ok(figure)
}

/// Run all sinusoid examples through `renderer`
pub fn run(renderer: &mut dyn Renderer, config: &AnalysisConfig) -> DspResult<DemoSummary> {
    let analyzer = PeriodicityAnalyzer::from_config(config)?;
    log::info!(
        "Complex sinusoids and periodicity (N <= {})",
        analyzer.max_denominator()
    );

    render_examples(
        renderer,
        vec![
            ("periodicity conditions", periodicity_conditions(&analyzer)),
            (
                "periodic case",
                complex_sinusoid_figure(&analyzer, PI / 4.0, COMPARISON_SAMPLES, "- Periodic Case"),
            ),
            (
                "non-periodic case",
                complex_sinusoid_figure(&analyzer, 1.0, COMPARISON_SAMPLES, "- Non-Periodic Case"),
            ),
            ("aliasing", aliasing_relationship(config)),
            ("frequency resolution", frequency_resolution_figure(&analyzer)),
        ],
    )
}
