//! Style span construction in preview coordinates.

use std::ops::Range;

use crate::line::RenderedLine;
use crate::pattern::SpanTag;

/// A style range over preview text.
///
/// Char offsets; line-relative out of [`line_spans`], document-absolute out
/// of the assembler. Only ever built with `range.end > range.start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub tag: SpanTag,
    pub range: Range<usize>,
}

impl StyleSpan {
    pub fn new(tag: SpanTag, start: usize, end: usize) -> Self {
        Self { tag, range: start..end }
    }
}

/// Build the spans for one transformed line, header span first.
///
/// The header span covers the whole preview line and is suppressed when the
/// preview is empty. Inline spans translate each match's inner bounds
/// (shifted past the header marker) through the column map.
pub fn line_spans(line: &RenderedLine) -> Vec<StyleSpan> {
    let mut spans = Vec::new();

    if let Some(tag) = SpanTag::heading(line.header.level) {
        let len = line.preview_chars();
        if len > 0 {
            spans.push(StyleSpan::new(tag, 0, len));
        }
    }

    for m in &line.matches {
        let raw_start = line.header.body_start + m.inner.start;
        let raw_end = line.header.body_start + m.inner.end;
        let (Some(&start), Some(&end)) = (line.map.get(raw_start), line.map.get(raw_end)) else {
            continue;
        };
        if end > start {
            spans.push(StyleSpan::new(m.kind.tag(), start, end));
        }
    }

    spans
}
