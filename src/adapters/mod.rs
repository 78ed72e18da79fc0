//! Adapters — implementations of the port traits

pub mod json_renderer;
pub mod recording_renderer;
pub mod text_renderer;

pub use json_renderer::JsonRenderer;
pub use recording_renderer::RecordingRenderer;
pub use text_renderer::TextRenderer;
