//! Discrete-time signal concepts
//!
//! Even/odd decomposition of indexed signals and periodicity analysis of
//! discrete complex sinusoids, with demos rendered through pluggable
//! renderers.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, errors and configuration
//! - `dsp/` - Signal analysis (pure functions, no I/O)
//! - `ports/` - Trait definitions for output (renderers)
//! - `adapters/` - Implementations of ports (text, JSON, recording)
//! - `demos/` - Example signals packed into figures (driving the ports)

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Demonstrations
pub mod demos;

pub use domain::{AnalysisConfig, DspError, DspResult, Frequency};
pub use dsp::{
    analyze_periodicity, compute_alias_set, decompose, frequency_resolution, IndexedSignal,
    PeriodicityResult,
};
