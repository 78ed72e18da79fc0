//! Chart descriptions handed to a renderer
//!
//! A `Figure` is plain data: it says what to draw, never how. Renderers
//! decide layout, colours and output format.

use serde::{Deserialize, Serialize};

use crate::dsp::IndexedSignal;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStyle {
    Stem,
    Line,
}

/// One labelled set of (x, y) points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Stem series from a real signal, x = n
    pub fn stem(label: impl Into<String>, signal: &IndexedSignal<f64>) -> Self {
        Self {
            label: label.into(),
            style: SeriesStyle::Stem,
            points: signal.iter().map(|(n, v)| (n as f64, v)).collect(),
        }
    }

    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            style: SeriesStyle::Line,
            points,
        }
    }
}

/// A single subplot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Vertical marker lines, e.g. period boundaries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<f64>,
    /// Shaded x interval, e.g. one period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_limits: Option<(f64, f64)>,
}

impl Panel {
    pub fn new(title: impl Into<String>, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            ..Default::default()
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = f64>) -> Self {
        self.markers.extend(markers);
        self
    }

    pub fn with_span(mut self, start: f64, end: f64) -> Self {
        self.span = Some((start, end));
        self
    }

    pub fn with_y_limits(mut self, low: f64, high: f64) -> Self {
        self.y_limits = Some((low, high));
        self
    }
}

/// A titled grid of panels plus free-form notes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    /// Number of panel columns in the grid
    pub columns: usize,
    pub panels: Vec<Panel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Figure {
    pub fn new(title: impl Into<String>, columns: usize) -> Self {
        Self {
            title: title.into(),
            columns: columns.max(1),
            ..Default::default()
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_series_uses_signal_indices_as_x() {
        let x = IndexedSignal::from_samples(-1, [0.5, 1.0]);
        let series = Series::stem("x[n]", &x);
        assert_eq!(series.points, vec![(-1.0, 0.5), (0.0, 1.0)]);
        assert_eq!(series.style, SeriesStyle::Stem);
    }

    #[test]
    fn figure_serializes_without_empty_optionals() {
        let figure = Figure::new("Demo", 2).with_panel(Panel::new("p", "n", "Amplitude"));
        let json = serde_json::to_string(&figure).unwrap();
        assert!(json.contains("\"title\":\"Demo\""));
        assert!(!json.contains("markers"));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn zero_columns_is_clamped() {
        assert_eq!(Figure::new("t", 0).columns, 1);
    }
}
