//! Inline match scanning and overlap resolution.
//!
//! Matching runs kind by kind in [`InlineKind::PRIORITY`] order, each kind
//! collecting every non-self-overlapping occurrence over the whole body.
//! Matches of different kinds may overlap each other; [`resolve_overlaps`]
//! reduces the combined list to an ascending, non-overlapping sequence.

use std::ops::Range;

use regex::Regex;
use smol_str::SmolStr;

use crate::pattern::{InlineKind, re_bold, re_code, re_strike};

/// One occurrence of an inline pattern in a line's body text.
///
/// All offsets are char columns relative to the body (the part of the line
/// after any header marker). Invariant:
/// `full.start <= inner.start <= inner.end <= full.end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: InlineKind,
    /// Marker-inclusive extent.
    pub full: Range<usize>,
    /// Content-only extent.
    pub inner: Range<usize>,
    /// The inner content.
    pub text: SmolStr,
}

/// Find every inline match in a body, in kind priority order.
///
/// The output is unordered across kinds and may contain overlaps.
pub fn find_inline_matches(body: &str) -> Vec<InlineMatch> {
    let mut matches = Vec::new();
    for kind in InlineKind::PRIORITY {
        match kind {
            InlineKind::Code => regex_matches(kind, re_code(), body, &mut matches),
            InlineKind::Bold => regex_matches(kind, re_bold(), body, &mut matches),
            InlineKind::Strike => regex_matches(kind, re_strike(), body, &mut matches),
            InlineKind::Italic => italic_matches(body, &mut matches),
        }
    }
    matches
}

/// Reduce raw matches to an ascending, non-overlapping sequence.
///
/// Stable sort by start column (ties keep kind priority order), then a
/// left-to-right walk accepting a match iff it starts at or after the end
/// of the last accepted one. Leftmost-greedy: deliberately not globally
/// optimal, pinned behavior covered by fixture tests.
pub fn resolve_overlaps(mut matches: Vec<InlineMatch>) -> Vec<InlineMatch> {
    matches.sort_by_key(|m| m.full.start);
    let mut resolved = Vec::with_capacity(matches.len());
    let mut cursor = 0;
    for m in matches {
        if m.full.start >= cursor {
            cursor = m.full.end;
            resolved.push(m);
        }
    }
    resolved
}

/// Matcher plus resolver: the ordered, non-overlapping matches for a body.
pub fn scan_body(body: &str) -> Vec<InlineMatch> {
    resolve_overlaps(find_inline_matches(body))
}

fn regex_matches(kind: InlineKind, re: &Regex, body: &str, out: &mut Vec<InlineMatch>) {
    for caps in re.captures_iter(body) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push(InlineMatch {
            kind,
            full: to_char_range(body, full.start()..full.end()),
            inner: to_char_range(body, inner.start()..inner.end()),
            text: inner.as_str().into(),
        });
    }
}

/// Convert a byte range from the regex engine into char columns.
fn to_char_range(s: &str, bytes: Range<usize>) -> Range<usize> {
    let start = s[..bytes.start].chars().count();
    let end = start + s[bytes.start..bytes.end].chars().count();
    start..end
}

/// Italic scanner.
///
/// An italic delimiter is a `*` that does not neighbour another `*`, which
/// the regex crate cannot express without look-around, so this kind is
/// scanned by hand: an opening delimiter, then the nearest closing `*` at
/// distance >= 2 whose left neighbour is not `*` and whose right neighbour
/// is not `*`. Scanning resumes after each accepted match and advances one
/// column after a failed attempt.
fn italic_matches(body: &str, out: &mut Vec<InlineMatch>) {
    let chars: Vec<char> = body.chars().collect();
    let n = chars.len();
    let mut i = 0;
    while i < n {
        if !is_italic_open(&chars, i) {
            i += 1;
            continue;
        }
        match (i + 2..n).find(|&e| is_italic_close(&chars, e)) {
            Some(e) => {
                let text: String = chars[i + 1..e].iter().collect();
                out.push(InlineMatch {
                    kind: InlineKind::Italic,
                    full: i..e + 1,
                    inner: i + 1..e,
                    text: text.into(),
                });
                i = e + 1;
            }
            None => i += 1,
        }
    }
}

fn is_italic_open(chars: &[char], i: usize) -> bool {
    chars[i] == '*'
        && (i == 0 || chars[i - 1] != '*')
        && chars.get(i + 1).is_some_and(|&c| c != '*')
}

fn is_italic_close(chars: &[char], i: usize) -> bool {
    // Callers only probe i >= 2, so i - 1 is inside the inner content.
    chars[i] == '*' && chars[i - 1] != '*' && chars.get(i + 1).is_none_or(|&c| c != '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(body: &str, kind: InlineKind) -> Vec<InlineMatch> {
        find_inline_matches(body)
            .into_iter()
            .filter(|m| m.kind == kind)
            .collect()
    }

    #[test]
    fn test_bold_match() {
        let matches = only("say **hi** now", InlineKind::Bold);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 4..10);
        assert_eq!(matches[0].inner, 6..8);
        assert_eq!(matches[0].text, "hi");
    }

    #[test]
    fn test_code_requires_content() {
        assert!(only("``", InlineKind::Code).is_empty());

        let matches = only("`a`", InlineKind::Code);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 0..3);
        assert_eq!(matches[0].inner, 1..2);
    }

    #[test]
    fn test_code_inner_excludes_backtick() {
        // The inner content cannot start with a backtick, so the match
        // shifts one column right and the outer backticks render literally.
        let matches = only("``x``", InlineKind::Code);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 1..4);
        assert_eq!(matches[0].inner, 2..3);
    }

    #[test]
    fn test_strike_match() {
        let matches = only("a ~~gone~~ b", InlineKind::Strike);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 2..10);
        assert_eq!(matches[0].inner, 4..8);
        assert_eq!(matches[0].text, "gone");
    }

    #[test]
    fn test_strike_non_greedy() {
        let matches = only("~~~x~~", InlineKind::Strike);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 0..6);
        assert_eq!(matches[0].inner, 2..4);
        assert_eq!(matches[0].text, "~x");
    }

    #[test]
    fn test_italic_basic() {
        let matches = only("*a*", InlineKind::Italic);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 0..3);
        assert_eq!(matches[0].inner, 1..2);
    }

    #[test]
    fn test_italic_never_fires_on_bold_edges() {
        assert!(only("**a**", InlineKind::Italic).is_empty());
        assert!(only("***text***", InlineKind::Italic).is_empty());
        assert!(only("*a**", InlineKind::Italic).is_empty());
    }

    #[test]
    fn test_triple_star_reads_as_bold() {
        let matches = find_inline_matches("***text***");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, InlineKind::Bold);
        assert_eq!(matches[0].full, 0..9);
        assert_eq!(matches[0].inner, 2..7);
        assert_eq!(matches[0].text, "*text");
    }

    #[test]
    fn test_italic_inner_may_contain_stars() {
        let matches = only("a*b**c*d", InlineKind::Italic);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 1..7);
        assert_eq!(matches[0].inner, 2..6);
        assert_eq!(matches[0].text, "b**c");
    }

    #[test]
    fn test_matches_do_not_self_overlap() {
        let matches = only("**a** and **b**", InlineKind::Bold);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].full, 0..5);
        assert_eq!(matches[1].full, 10..15);

        // The middle backtick is consumed by the first match.
        assert_eq!(only("`a`b`", InlineKind::Code).len(), 1);
    }

    #[test]
    fn test_resolver_pinned_overlap() {
        let raw = find_inline_matches("**a~~b**~~");
        assert_eq!(raw.len(), 2);

        let resolved = resolve_overlaps(raw);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, InlineKind::Bold);
        assert_eq!(resolved[0].full, 0..8);
        assert_eq!(resolved[0].inner, 2..6);
        // The strike match (full 3..10) started inside the accepted bold
        // match and is discarded.
    }

    #[test]
    fn test_resolver_keeps_code_over_inner_italic() {
        let resolved = scan_body("`*a*`");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, InlineKind::Code);
        assert_eq!(resolved[0].full, 0..5);
    }

    #[test]
    fn test_resolved_matches_are_ascending_and_disjoint() {
        let bodies = [
            "**a~~b**~~",
            "`x` *y* ~~z~~ **w**",
            "***text*** and *more*",
            "a*b**c*d `e` f",
        ];
        for body in bodies {
            let resolved = scan_body(body);
            for pair in resolved.windows(2) {
                assert!(
                    pair[0].full.end <= pair[1].full.start,
                    "overlap in {body:?}: {pair:?}"
                );
            }
            for m in resolved {
                assert!(m.full.start <= m.inner.start);
                assert!(m.inner.start <= m.inner.end);
                assert!(m.inner.end <= m.full.end);
            }
        }
    }

    #[test]
    fn test_unicode_offsets_are_char_columns() {
        let matches = only("código **así**", InlineKind::Bold);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full, 7..14);
        assert_eq!(matches[0].inner, 9..12);
        assert_eq!(matches[0].text, "así");
    }
}
