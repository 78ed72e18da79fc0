//! Plain-text renderer
//!
//! Writes each figure as a titled block: panel headings, one table per
//! series, marker positions and notes. Meant for terminals and logs.

use std::io::Write;

use crate::domain::{DspError, DspResult, Figure, Panel, SeriesStyle};
use crate::ports::Renderer;

/// Renderer writing human-readable tables to any `io::Write`
pub struct TextRenderer<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, precision: 4 }
    }

    /// Digits after the decimal point for values
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_panel(&mut self, index: usize, columns: usize, panel: &Panel) -> std::io::Result<()> {
        let (row, col) = (index / columns, index % columns);
        writeln!(self.out, "--- [{row},{col}] {} ---", panel.title)?;
        writeln!(self.out, "    x: {}   y: {}", panel.x_label, panel.y_label)?;
        if let Some((low, high)) = panel.y_limits {
            writeln!(self.out, "    y-limits: [{low}, {high}]")?;
        }
        if let Some((start, end)) = panel.span {
            writeln!(self.out, "    shaded: {start} .. {end}")?;
        }
        if !panel.markers.is_empty() {
            let markers: Vec<String> = panel.markers.iter().map(|m| m.to_string()).collect();
            writeln!(self.out, "    markers at: {}", markers.join(", "))?;
        }
        for series in &panel.series {
            let style = match series.style {
                SeriesStyle::Stem => "stem",
                SeriesStyle::Line => "line",
            };
            writeln!(self.out, "    {} ({style})", series.label)?;
            for &(x, y) in &series.points {
                writeln!(self.out, "      {x:>8} | {y:>12.prec$}", prec = self.precision)?;
            }
        }
        Ok(())
    }

    fn write_figure(&mut self, figure: &Figure) -> std::io::Result<()> {
        let rule = "=".repeat(figure.title.chars().count().max(8));
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{}", figure.title)?;
        writeln!(self.out, "{rule}")?;
        for (i, panel) in figure.panels.iter().enumerate() {
            self.write_panel(i, figure.columns, panel)?;
        }
        for note in &figure.notes {
            writeln!(self.out, "{note}")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, figure: &Figure) -> DspResult<()> {
        log::debug!("Rendering '{}' as text", figure.title);
        self.write_figure(figure)
            .map_err(|e| DspError::Render(format!("Failed to write '{}': {e}", figure.title)))
    }

    fn finish(&mut self) -> DspResult<()> {
        self.out
            .flush()
            .map_err(|e| DspError::Render(format!("Failed to flush output: {e}")))
    }
}
