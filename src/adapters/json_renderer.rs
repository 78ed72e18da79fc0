//! JSON renderer — one compact JSON document per figure, newline separated

use std::io::Write;

use crate::domain::{DspError, DspResult, Figure};
use crate::ports::Renderer;

/// Renderer emitting figures as JSON lines, for external plotting tools
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, figure: &Figure) -> DspResult<()> {
        log::debug!("Rendering '{}' as JSON", figure.title);
        serde_json::to_writer(&mut self.out, figure)
            .map_err(|e| DspError::Render(format!("Serialization error: {e}")))?;
        writeln!(self.out).map_err(|e| DspError::Render(format!("Failed to write: {e}")))
    }

    fn finish(&mut self) -> DspResult<()> {
        self.out
            .flush()
            .map_err(|e| DspError::Render(format!("Failed to flush output: {e}")))
    }
}
