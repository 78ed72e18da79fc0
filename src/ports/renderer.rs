//! Renderer port trait

use crate::domain::{DspResult, Figure};

/// Trait for anything that turns a computed `Figure` into output
/// (terminal text, JSON documents, an in-memory log).
pub trait Renderer {
    /// Render one figure
    fn render(&mut self, figure: &Figure) -> DspResult<()>;

    /// Flush buffered output, if any
    fn finish(&mut self) -> DspResult<()> {
        Ok(())
    }
}
