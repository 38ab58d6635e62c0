//! Inline and header pattern definitions.
//!
//! The grammar is a fixed subset of Markdown: ATX headers (`#` through
//! `######`) and four inline marker pairs. The patterns are pinned behavior;
//! markers that fail to match render literally, there is no error case.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// The four inline format kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Code,
    Bold,
    Strike,
    Italic,
}

impl InlineKind {
    /// Matcher priority order. Matches are collected kind by kind in this
    /// order, which is also the tie-break when two matches start at the
    /// same column (the overlap sort is stable).
    pub const PRIORITY: [InlineKind; 4] = [
        InlineKind::Code,
        InlineKind::Bold,
        InlineKind::Strike,
        InlineKind::Italic,
    ];

    /// The style tag a match of this kind produces.
    pub fn tag(self) -> SpanTag {
        match self {
            InlineKind::Code => SpanTag::CodeInline,
            InlineKind::Bold => SpanTag::Bold,
            InlineKind::Strike => SpanTag::Strike,
            InlineKind::Italic => SpanTag::Italic,
        }
    }
}

/// Closed vocabulary of style tags applied over preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Bold,
    Italic,
    Strike,
    CodeInline,
}

impl SpanTag {
    /// Every tag a host may have applied; the set to clear before
    /// re-applying styles.
    pub const ALL: [SpanTag; 10] = [
        SpanTag::H1,
        SpanTag::H2,
        SpanTag::H3,
        SpanTag::H4,
        SpanTag::H5,
        SpanTag::H6,
        SpanTag::Bold,
        SpanTag::Italic,
        SpanTag::Strike,
        SpanTag::CodeInline,
    ];

    /// Tag for a header of the given level, `None` outside `1..=6`.
    pub fn heading(level: u8) -> Option<SpanTag> {
        match level {
            1 => Some(SpanTag::H1),
            2 => Some(SpanTag::H2),
            3 => Some(SpanTag::H3),
            4 => Some(SpanTag::H4),
            5 => Some(SpanTag::H5),
            6 => Some(SpanTag::H6),
            _ => None,
        }
    }

    /// Stable tag name for hosts that key their styles by string.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanTag::H1 => "h1",
            SpanTag::H2 => "h2",
            SpanTag::H3 => "h3",
            SpanTag::H4 => "h4",
            SpanTag::H5 => "h5",
            SpanTag::H6 => "h6",
            SpanTag::Bold => "bold",
            SpanTag::Italic => "italic",
            SpanTag::Strike => "strike",
            SpanTag::CodeInline => "code_inline",
        }
    }
}

impl fmt::Display for SpanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header marker split off the front of a raw line.
///
/// `level == 0` means "not a header"; `body_start` is then 0. `body_start`
/// is the char column where the body text begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderInfo {
    pub level: u8,
    pub body_start: usize,
}

impl HeaderInfo {
    pub fn is_header(&self) -> bool {
        self.level > 0
    }
}

fn re_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(#{1,6})\s+(.*)$").expect("re_header: pattern is valid and always compiles")
    })
}

pub(crate) fn re_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"`([^`\n]+?)`").expect("re_code: pattern is valid and always compiles")
    })
}

pub(crate) fn re_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*").expect("re_bold: pattern is valid and always compiles")
    })
}

pub(crate) fn re_strike() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"~~(.+?)~~").expect("re_strike: pattern is valid and always compiles")
    })
}

/// Split a raw line into its header marker and body text.
///
/// A header is 1 to 6 `#` characters followed by at least one whitespace
/// char at line start. Anything else (`#x`, seven hashes, a bare `#`) is
/// not a header and the whole line is the body.
pub fn split_header(line: &str) -> (HeaderInfo, &str) {
    match re_header().captures(line) {
        Some(caps) => {
            let level = caps[1].len() as u8;
            let body_byte = caps.get(2).map_or(0, |m| m.start());
            let body_start = line[..body_byte].chars().count();
            (HeaderInfo { level, body_start }, &line[body_byte..])
        }
        None => (HeaderInfo::default(), line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header_levels() {
        let (info, body) = split_header("# Title");
        assert_eq!(info, HeaderInfo { level: 1, body_start: 2 });
        assert_eq!(body, "Title");

        let (info, body) = split_header("### deep");
        assert_eq!(info, HeaderInfo { level: 3, body_start: 4 });
        assert_eq!(body, "deep");

        let (info, body) = split_header("###### six");
        assert_eq!(info, HeaderInfo { level: 6, body_start: 7 });
        assert_eq!(body, "six");
    }

    #[test]
    fn test_split_header_rejects_malformed() {
        // No whitespace after the hashes.
        assert_eq!(split_header("#x"), (HeaderInfo::default(), "#x"));
        // Seven hashes is not a header at all.
        let line = "####### seven";
        assert_eq!(split_header(line), (HeaderInfo::default(), line));
        assert_eq!(split_header("plain"), (HeaderInfo::default(), "plain"));
        assert_eq!(split_header("#"), (HeaderInfo::default(), "#"));
        assert_eq!(split_header(""), (HeaderInfo::default(), ""));
    }

    #[test]
    fn test_split_header_whitespace_run() {
        // The whole whitespace run belongs to the marker.
        let (info, body) = split_header("#   spaced");
        assert_eq!(info, HeaderInfo { level: 1, body_start: 4 });
        assert_eq!(body, "spaced");

        let (info, body) = split_header("#\t x");
        assert_eq!(info, HeaderInfo { level: 1, body_start: 3 });
        assert_eq!(body, "x");
    }

    #[test]
    fn test_split_header_empty_body() {
        let (info, body) = split_header("# ");
        assert_eq!(info, HeaderInfo { level: 1, body_start: 2 });
        assert_eq!(body, "");
    }

    #[test]
    fn test_heading_tags() {
        assert_eq!(SpanTag::heading(0), None);
        assert_eq!(SpanTag::heading(1), Some(SpanTag::H1));
        assert_eq!(SpanTag::heading(6), Some(SpanTag::H6));
        assert_eq!(SpanTag::heading(7), None);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(SpanTag::H1.as_str(), "h1");
        assert_eq!(SpanTag::H6.as_str(), "h6");
        assert_eq!(SpanTag::Bold.as_str(), "bold");
        assert_eq!(SpanTag::Italic.as_str(), "italic");
        assert_eq!(SpanTag::Strike.as_str(), "strike");
        assert_eq!(SpanTag::CodeInline.as_str(), "code_inline");
        assert_eq!(SpanTag::CodeInline.to_string(), "code_inline");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(InlineKind::Code.tag(), SpanTag::CodeInline);
        assert_eq!(InlineKind::Bold.tag(), SpanTag::Bold);
        assert_eq!(InlineKind::Strike.tag(), SpanTag::Strike);
        assert_eq!(InlineKind::Italic.tag(), SpanTag::Italic);
    }
}
