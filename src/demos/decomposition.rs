//! Even/odd decomposition demo
//!
//! Three signals: an arbitrary five-sample sequence, a causal exponential
//! and a sampled sine. Each becomes a 2×2 figure: original, even part, odd
//! part and the x = x_e + x_o verification overlay.

use std::f64::consts::PI;

use crate::domain::{AnalysisConfig, DspResult, Figure, Panel, Series};
use crate::dsp::{ClosedForm, DecompositionResult, EvenOddDecomposer, IndexedSignal};
use crate::ports::Renderer;

use super::{format_values, render_examples, DemoSummary};

/// Decay factor of the exponential example
const EXPONENTIAL_BASE: f64 = 0.8;

/// Build the 2×2 decomposition figure for a real signal
pub fn decomposition_figure(title: &str, result: &DecompositionResult<f64>) -> Figure {
    let mut figure = Figure::new(title, 2)
        .with_panel(
            Panel::new("Original Signal x[n]", "n", "Amplitude")
                .with_series(Series::stem("x[n]", &result.original)),
        )
        .with_panel(
            Panel::new("Even Part x_e[n] = (x[n] + x[-n])/2", "n", "Amplitude")
                .with_series(Series::stem("x_e[n]", &result.even)),
        )
        .with_panel(
            Panel::new("Odd Part x_o[n] = (x[n] - x[-n])/2", "n", "Amplitude")
                .with_series(Series::stem("x_o[n]", &result.odd)),
        )
        .with_panel(
            Panel::new("Verification: x[n] = x_e[n] + x_o[n]", "n", "Amplitude")
                .with_series(Series::stem("Reconstructed", &result.reconstruction))
                .with_series(Series::stem("Original", &result.original)),
        );
    figure.note(format!("Even part: {}", format_values(result.even.values())));
    figure.note(format!("Odd part:  {}", format_values(result.odd.values())));
    figure.note(format!(
        "Max reconstruction error: {:.2e}",
        result.max_error
    ));
    figure
}

/// Example 1: [2, 1, -1, 3, 2] recentred so the middle sample sits at n = 0
pub fn arbitrary_signal(decomposer: &EvenOddDecomposer) -> DspResult<Figure> {
    let x = IndexedSignal::from_samples(0, [2.0, 1.0, -1.0, 3.0, 2.0]).recentered()?;
    let result = decomposer.decompose(&x)?;

    let mut figure = decomposition_figure("Example 1: Arbitrary Signal Decomposition", &result);
    figure.note(format!("Signal: x[n] = {}", format_values(x.values())));
    figure.note(format!(
        "Indices: n = {:?}",
        x.indices().collect::<Vec<_>>()
    ));
    Ok(figure)
}

/// Example 2: x[n] = a^n u[n], observed over -5..=5
pub fn exponential_signal(decomposer: &EvenOddDecomposer) -> DspResult<Figure> {
    let a = EXPONENTIAL_BASE;
    let x = ClosedForm::new(-5..=5, move |n: i64| {
        if n >= 0 {
            a.powi(n as i32)
        } else {
            0.0
        }
    });
    let result = decomposer.decompose(&x)?;

    let mut figure = decomposition_figure(
        &format!("Example 2: Exponential Signal (a={a}) Decomposition"),
        &result,
    );
    let causal: Vec<f64> = (0..=5).map(|n| x.eval(n)).collect();
    figure.note(format!("Signal: x[n] = {a}^n for n = [0..5]"));
    figure.note(format!("Values: x[n] = {}", format_values(causal)));
    Ok(figure)
}

/// Example 3: x[n] = sin(πn/4), an odd signal
pub fn sinusoidal_signal(decomposer: &EvenOddDecomposer) -> DspResult<Figure> {
    let omega = PI / 4.0;
    let x = ClosedForm::new(-5..=5, move |n: i64| (omega * n as f64).sin());
    let result = decomposer.decompose(&x)?;

    let mut figure = decomposition_figure("Example 3: Sinusoidal Signal Decomposition", &result);
    figure.note(format!(
        "Signal: x[n] = sin(π/4 * n), values {}",
        format_values(result.original.values())
    ));
    figure.note("Sine is an odd function: the even part is zero, the odd part equals x[n]");
    Ok(figure)
}

/// Summary of the decomposition identities
pub fn key_properties() -> Figure {
    let mut figure = Figure::new("Key Properties", 1);
    figure.note("Even signals: x_e[n] = x_e[-n] (symmetric about n=0)");
    figure.note("Odd signals:  x_o[n] = -x_o[-n] (antisymmetric about n=0)");
    figure.note("Any signal can be uniquely decomposed into even + odd parts");
    figure.note("Even part of odd signal = 0, Odd part of even signal = 0");
    figure
}

/// Run all decomposition examples through `renderer`
pub fn run(renderer: &mut dyn Renderer, config: &AnalysisConfig) -> DspResult<DemoSummary> {
    let decomposer = EvenOddDecomposer::from_config(config)?;
    log::info!(
        "Signal decomposition into even and odd parts (tolerance {:e})",
        decomposer.tolerance()
    );

    render_examples(
        renderer,
        vec![
            ("arbitrary signal", arbitrary_signal(&decomposer)),
            ("exponential signal", exponential_signal(&decomposer)),
            ("sinusoidal signal", sinusoidal_signal(&decomposer)),
            ("key properties", Ok(key_properties())),
        ],
    )
}
