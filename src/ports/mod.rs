//! Port traits (interfaces)
//!
//! These traits define the boundary between the pure analysis core and its
//! output. Adapters implement them to produce concrete output.

pub mod renderer;

pub use renderer::*;
