//! Core domain types
//!
//! Pure types with no I/O dependencies beyond config file loading. These
//! represent the core concepts shared by the analysis components and the
//! renderers.

pub mod config;
pub mod error;
pub mod figure;
pub mod types;

pub use config::*;
pub use error::*;
pub use figure::*;
pub use types::*;
