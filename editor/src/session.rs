use std::ops::Range;

use screenplay::block::Block;
use screenplay::format::{blocks_to_text, text_to_blocks};

use crate::snippet::{ElementKind, insert_element};
use crate::viewport::{Viewport, caret_line, centered_scroll};
use crate::wrap::auto_wrap_with_caret;

/// Editing state for one open scene: the authoritative text buffer, the
/// selection, and the scroll offset. Blocks exist only at the load/save
/// boundary; every keystroke works on the buffer directly.
///
/// Programmatic mutations follow a two-phase contract. Phase one (a
/// keystroke that wrapped, or an element insertion) commits the new content
/// immediately but only STAGES the caret placement. Phase two,
/// [`EditorSession::after_render`], must be called once the surface has laid
/// the committed content out; it applies the staged selection and recenters
/// the scroll against the fresh geometry. Reading line geometry before the
/// content is visible would center against a stale layout.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    content: String,
    selection: Range<usize>,
    scroll_top: f32,
    /// Selection staged by a programmatic mutation, applied on after_render.
    pending: Option<Range<usize>>,
}

impl EditorSession {
    pub fn new(content: impl Into<String>) -> Self {
        EditorSession {
            content: content.into(),
            selection: 0..0,
            scroll_top: 0.0,
            pending: None,
        }
    }

    /// Seed the buffer from stored blocks. The one conversion on load.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        EditorSession::new(blocks_to_text(blocks))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Convert the buffer back to blocks. The one conversion on save.
    pub fn blocks(&self) -> Vec<Block> {
        text_to_blocks(&self.content)
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// True when a mutation has been committed but its caret placement not
    /// yet applied.
    pub fn has_pending_caret(&self) -> bool {
        self.pending.is_some()
    }

    /// The surface reports user-driven caret motion (clicks, arrow keys).
    pub fn set_selection(&mut self, selection: Range<usize>) {
        let end = selection.end.min(self.content.len());
        self.selection = selection.start.min(end)..end;
    }

    /// A buffer change from the input surface: `raw` is the full new text,
    /// `caret_before` the caret right after the user's edit. Runs the
    /// dialogue wrap pass. If nothing wrapped the caret lands immediately;
    /// if the pass re-flowed text, the remapped caret is staged for
    /// [`EditorSession::after_render`].
    pub fn apply_keystroke(&mut self, raw: &str, caret_before: usize) -> &str {
        let outcome = auto_wrap_with_caret(raw, caret_before);
        if outcome.text == raw {
            let caret = caret_before.min(raw.len());
            self.content = outcome.text;
            self.selection = caret..caret;
            self.pending = None;
        } else {
            self.content = outcome.text;
            self.pending = Some(outcome.caret..outcome.caret);
        }
        &self.content
    }

    /// Insert an element snippet at the current selection; the placeholder
    /// selection is staged for [`EditorSession::after_render`].
    pub fn insert_element(&mut self, kind: ElementKind) -> &str {
        let insertion = insert_element(kind, &self.content, self.selection.clone());
        self.content = insertion.content;
        self.pending = Some(insertion.select);
        &self.content
    }

    /// Phase two: the surface has re-laid-out the committed content. Applies
    /// any staged selection, recenters the scroll on the caret's line, and
    /// returns the new scroll offset.
    pub fn after_render(&mut self, viewport: &Viewport) -> f32 {
        if let Some(selection) = self.pending.take() {
            self.selection = selection;
        }
        let line = caret_line(&self.content, self.selection.start);
        self.scroll_top = centered_scroll(viewport, line);
        self.scroll_top
    }
}
