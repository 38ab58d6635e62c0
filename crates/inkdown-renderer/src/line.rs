//! Line transformation: strip markers and build the raw→preview column map.
//!
//! One coordinated left-to-right pass over a line's body, driven by the
//! resolved matches, produces the marker-free preview text and a map from
//! every raw column to its preview column.

use crate::inline::{InlineMatch, scan_body};
use crate::pattern::{HeaderInfo, split_header};

/// Per-line map from raw char column to preview char column.
///
/// Length is `chars(raw line) + 1`: every raw column plus a one-past-the-end
/// sentinel, so an end-of-line cursor maps correctly. Values are monotonic
/// non-decreasing; marker columns map to the column of the content that
/// follows them.
pub type ColumnMap = Vec<usize>;

/// A single transformed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Preview text with the header marker and all inline markers removed.
    pub preview: String,
    pub map: ColumnMap,
    pub header: HeaderInfo,
    /// Resolved matches, in body-relative char columns.
    pub matches: Vec<InlineMatch>,
}

impl RenderedLine {
    /// Preview length in chars; the unit of every downstream offset.
    pub fn preview_chars(&self) -> usize {
        self.preview.chars().count()
    }
}

/// Transform one raw line.
///
/// Detects the header marker, resolves inline matches over the body,
/// strips markers, and builds the column map. For headers, the marker
/// columns collapse to preview column 0, where the header text begins.
pub fn render_line(raw_line: &str) -> RenderedLine {
    let (header, body) = split_header(raw_line);
    let matches = scan_body(body);
    let (preview, mut map) = strip_markers(body, &matches);
    if header.is_header() {
        let mut with_marker = vec![0; header.body_start];
        with_marker.append(&mut map);
        map = with_marker;
    }
    debug_assert_eq!(map.len(), raw_line.chars().count() + 1);
    RenderedLine {
        preview,
        map,
        header,
        matches,
    }
}

/// Strip inline markers from body text in one pass.
///
/// Gap and inner-content chars are copied and mapped; marker chars are
/// mapped to the current preview length without emitting output. A final
/// sentinel entry maps column `chars(body)` to the preview length.
fn strip_markers(body: &str, matches: &[InlineMatch]) -> (String, ColumnMap) {
    let chars: Vec<char> = body.chars().collect();
    let mut preview = String::with_capacity(body.len());
    let mut map = Vec::with_capacity(chars.len() + 1);
    let mut preview_pos = 0;
    let mut cursor = 0;

    for m in matches {
        for k in cursor..m.full.start {
            preview.push(chars[k]);
            map.push(preview_pos);
            preview_pos += 1;
        }
        for _ in m.full.start..m.inner.start {
            map.push(preview_pos);
        }
        for k in m.inner.clone() {
            preview.push(chars[k]);
            map.push(preview_pos);
            preview_pos += 1;
        }
        for _ in m.inner.end..m.full.end {
            map.push(preview_pos);
        }
        cursor = m.full.end;
    }
    for k in cursor..chars.len() {
        preview.push(chars[k]);
        map.push(preview_pos);
        preview_pos += 1;
    }
    map.push(preview_pos);

    (preview, map)
}
