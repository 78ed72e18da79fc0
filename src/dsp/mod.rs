//! Digital Signal Processing
//!
//! Pure functions for signal analysis. No I/O dependencies.

pub mod alias;
pub mod decompose;
pub mod periodicity;
pub mod signal;
pub mod sinusoid;

// Re-export commonly used items
pub use alias::{compute_alias_set, compute_alias_set_with_period, frequency_resolution, AliasSet};
pub use decompose::{decompose, DecompositionResult, EvenOddDecomposer};
pub use periodicity::{analyze_periodicity, PeriodicityAnalyzer, PeriodicityResult};
pub use signal::{ClosedForm, IndexedSignal, SignalSource};
pub use sinusoid::{period_markers, ComplexSinusoid};
