//! Document assembly and raw→preview index translation.

use crate::line::{ColumnMap, RenderedLine, render_line};
use crate::span::{StyleSpan, line_spans};

/// The derived preview of a whole document.
///
/// Recomputed on every preview entry, never persisted. All offsets are
/// absolute char offsets into `text`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewDocument {
    /// Marker-free text, lines joined by `\n`.
    pub text: String,
    /// Per-line maps from raw char column to absolute preview offset,
    /// indexable by `[line][column]`.
    pub maps: Vec<ColumnMap>,
    /// Absolute style spans, in line order.
    pub spans: Vec<StyleSpan>,
}

impl PreviewDocument {
    /// Translate a raw `(line, column)` cursor to an absolute preview
    /// offset. Both coordinates are 0-based chars.
    ///
    /// Out-of-range positions clamp: the line to the last line, the column
    /// to the sentinel entry at end-of-line. An empty document maps to 0.
    pub fn preview_offset(&self, line: usize, column: usize) -> usize {
        let Some(map) = self.maps.get(line).or_else(|| self.maps.last()) else {
            return 0;
        };
        map[column.min(map.len() - 1)]
    }
}

/// Assemble the preview for a raw document.
///
/// Lines are `\n`-separated; a trailing newline contributes no extra line.
/// The running offset advances by `chars(previewLine) + 1` per line (one
/// newline separator each) so the maps line up with the joined text.
pub fn render_preview(raw: &str) -> PreviewDocument {
    let mut preview_lines: Vec<String> = Vec::new();
    let mut maps: Vec<ColumnMap> = Vec::new();
    let mut spans: Vec<StyleSpan> = Vec::new();
    let mut abs_pos = 0;

    for raw_line in raw.lines() {
        let line = render_line(raw_line);

        for span in line_spans_abs(&line, abs_pos) {
            spans.push(span);
        }
        maps.push(line.map.iter().map(|&col| abs_pos + col).collect());

        abs_pos += line.preview_chars() + 1;
        preview_lines.push(line.preview);
    }

    let text = preview_lines.join("\n");

    tracing::trace!(
        target: "inkdown::render",
        raw_chars = raw.chars().count(),
        preview_chars = text.chars().count(),
        lines = maps.len(),
        spans = spans.len(),
        "assembled preview document"
    );

    PreviewDocument { text, maps, spans }
}

fn line_spans_abs(line: &RenderedLine, abs_pos: usize) -> Vec<StyleSpan> {
    line_spans(line)
        .into_iter()
        .map(|span| StyleSpan {
            tag: span.tag,
            range: abs_pos + span.range.start..abs_pos + span.range.end,
        })
        .collect()
}
