//! Demonstrations
//!
//! Each demo computes a handful of example signals, packs them into
//! `Figure`s and hands them to a `Renderer`. A failing example is logged and
//! skipped; the remaining examples still render. Renderer failures abort.

pub mod decomposition;
pub mod sinusoids;

use serde::Serialize;

use crate::domain::{DspResult, Figure};
use crate::ports::Renderer;

/// How many figures a demo produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DemoSummary {
    pub rendered: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for DemoSummary {
    fn add_assign(&mut self, other: Self) {
        self.rendered += other.rendered;
        self.skipped += other.skipped;
    }
}

/// Render every successfully built example, skipping the failed ones
fn render_examples(
    renderer: &mut dyn Renderer,
    examples: Vec<(&str, DspResult<Figure>)>,
) -> DspResult<DemoSummary> {
    let mut summary = DemoSummary::default();
    for (name, example) in examples {
        match example {
            Ok(figure) => {
                log::info!("Rendering {name}");
                renderer.render(&figure)?;
                summary.rendered += 1;
            }
            Err(e) => {
                log::warn!("Skipping {name}: {e}");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// "[2.000, 1.000, -1.000]"
fn format_values(values: impl IntoIterator<Item = f64>) -> String {
    let values: Vec<String> = values.into_iter().map(|v| format!("{v:.3}")).collect();
    format!("[{}]", values.join(", "))
}
