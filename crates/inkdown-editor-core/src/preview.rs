//! The two-state preview mode controller.

use inkdown_renderer::render_preview;

use crate::host::TextDisplay;
use crate::types::EditSnapshot;

/// Which view the host is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Editing,
    Preview,
}

/// Toggle between the editable raw view and the derived preview.
///
/// Entering preview captures the raw text and cursor, renders the preview
/// document into the host, and relocates the cursor through the column
/// maps. Leaving restores the captured snapshot verbatim, so the round
/// trip reproduces the original text byte-for-byte and the cursor exactly.
#[derive(Debug, Default)]
pub struct PreviewToggle {
    mode: EditorMode,
    snapshot: Option<EditSnapshot>,
}

impl PreviewToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_preview(&self) -> bool {
        self.mode == EditorMode::Preview
    }

    /// Flip between the two modes.
    ///
    /// Returns the new "preview active" state; callers forward it to
    /// whatever status UI wants to know.
    pub fn toggle<H: TextDisplay>(&mut self, host: &mut H) -> bool {
        match self.mode {
            EditorMode::Editing => self.enter_preview(host),
            EditorMode::Preview => self.leave_preview(host),
        }
        self.is_preview()
    }

    /// The Markdown source regardless of mode: the captured snapshot while
    /// previewing, the live host text while editing.
    pub fn source_text<H: TextDisplay>(&self, host: &H) -> String {
        match &self.snapshot {
            Some(snapshot) if self.is_preview() => snapshot.text.clone(),
            _ => host.text(),
        }
    }

    fn enter_preview<H: TextDisplay>(&mut self, host: &mut H) {
        let snapshot = EditSnapshot {
            text: host.text(),
            cursor: host.cursor(),
        };
        let doc = render_preview(&snapshot.text);

        tracing::debug!(
            target: "inkdown::preview",
            raw_chars = snapshot.text.chars().count(),
            lines = doc.maps.len(),
            spans = doc.spans.len(),
            "entering preview mode"
        );

        host.replace_text(&doc.text);
        host.clear_tags();
        for span in &doc.spans {
            host.apply_tag(span.tag, span.range.clone());
        }
        host.set_cursor_offset(doc.preview_offset(snapshot.cursor.line, snapshot.cursor.column));

        self.snapshot = Some(snapshot);
        self.mode = EditorMode::Preview;
    }

    fn leave_preview<H: TextDisplay>(&mut self, host: &mut H) {
        if let Some(snapshot) = self.snapshot.take() {
            host.clear_tags();
            host.replace_text(&snapshot.text);
            host.set_cursor(snapshot.cursor);
            tracing::debug!(
                target: "inkdown::preview",
                raw_chars = snapshot.text.chars().count(),
                "restored editing mode"
            );
        }
        self.mode = EditorMode::Editing;
    }
}
