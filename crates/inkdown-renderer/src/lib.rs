//! inkdown-renderer: Markdown live-preview computation.
//!
//! Given raw editable text with lightweight inline markup (headers, bold,
//! italic, strike-through, inline code), this crate produces:
//! - marker-free preview text,
//! - style spans over that text, and
//! - per-line raw→preview column maps, so a host can relocate its cursor
//!   across a preview toggle.
//!
//! The whole crate is pure and total: malformed markup fails to match and
//! renders literally, out-of-range lookups clamp, nothing errors. All
//! offsets are char offsets (Unicode scalar values), never bytes.

pub mod document;
pub mod inline;
pub mod line;
pub mod pattern;
pub mod span;

pub use document::{PreviewDocument, render_preview};
pub use inline::{InlineMatch, find_inline_matches, resolve_overlaps, scan_body};
pub use line::{ColumnMap, RenderedLine, render_line};
pub use pattern::{HeaderInfo, InlineKind, SpanTag, split_header};
pub use span::{StyleSpan, line_spans};
