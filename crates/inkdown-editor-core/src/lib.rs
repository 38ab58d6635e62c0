//! inkdown-editor-core: editing-side surface for the live-preview engine.
//!
//! Pairs the pure renderer with a host capability trait and the two-state
//! preview mode controller. Framework-agnostic: any text widget that can
//! get/set text and cursor and apply named style ranges can host it.

pub mod host;
pub mod preview;
pub mod types;

pub use host::TextDisplay;
pub use inkdown_renderer::{PreviewDocument, SpanTag, StyleSpan, render_preview};
pub use preview::{EditorMode, PreviewToggle};
pub use types::{EditSnapshot, RawPosition};
