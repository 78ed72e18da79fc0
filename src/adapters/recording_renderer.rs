//! Recording renderer for tests and embedding.
//!
//! Keeps every rendered figure in memory. Each call is logged at INFO level
//! so a run with RUST_LOG=dtsig_lib=info shows exactly what would have been
//! drawn:
//!
//!   RUST_LOG=dtsig_lib=info cargo run -- sinusoids

use crate::domain::{DspResult, Figure};
use crate::ports::Renderer;

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    figures: Vec<Figure>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn titles(&self) -> Vec<&str> {
        self.figures.iter().map(|f| f.title.as_str()).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, figure: &Figure) -> DspResult<()> {
        let points: usize = figure
            .panels
            .iter()
            .flat_map(|p| &p.series)
            .map(|s| s.points.len())
            .sum();
        log::info!(
            "[RECORDER] '{}': {} panels, {points} points, {} notes",
            figure.title,
            figure.panels.len(),
            figure.notes.len()
        );
        self.figures.push(figure.clone());
        Ok(())
    }
}
