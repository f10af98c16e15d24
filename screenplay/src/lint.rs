use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

use crate::block::Block;
use crate::format::{
    CHARACTER_INDENT, DIALOGUE_INDENT, DIALOGUE_WIDTH, TRANSITION_INDENT, classify_line,
    leading_whitespace,
};

/// A formatting ambiguity with source location information.
///
/// Classification itself never fails (every line maps to some block), so the
/// lint pass is where silently-degraded lines get surfaced to the user.
#[derive(Debug, Clone)]
pub struct FormatWarning {
    pub message: String,
    pub span: Range<usize>,
    pub file_id: usize,
    pub severity: Severity,
    pub notes: Vec<String>,
}

impl FormatWarning {
    pub fn warning(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        FormatWarning {
            message: message.into(),
            span,
            file_id,
            severity: Severity::Warning,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::new(self.severity)
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}

/// Standard columns a well-formed scene uses. Any other indent still
/// classifies (the thresholds are >=, not ==) but is worth flagging.
const KNOWN_COLUMNS: [usize; 3] = [DIALOGUE_INDENT, CHARACTER_INDENT, TRANSITION_INDENT];

/// Scan scene text for lines that classify, but not the way the indentation
/// suggests the author meant. Never rejects anything; conversion output is
/// unaffected.
pub fn lint_scene(text: &str, file_id: usize) -> Vec<FormatWarning> {
    let mut warnings = Vec::new();
    let mut offset = 0;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let span = offset..offset + line.len();
        // +1 for the newline; the final line without one just ends the loop
        offset = span.end + 1;

        if line.trim().is_empty() {
            continue;
        }

        let indent = leading_whitespace(line);
        let block = classify_line(line);

        if indent >= DIALOGUE_INDENT && !KNOWN_COLUMNS.contains(&indent) {
            warnings.push(
                FormatWarning::warning(
                    format!(
                        "line indented {} columns reads as {}",
                        indent,
                        block.kind_name()
                    ),
                    span.clone(),
                    file_id,
                )
                .with_note(format!(
                    "standard columns are {} (dialogue), 33 (character), {} (transition)",
                    DIALOGUE_INDENT, TRANSITION_INDENT
                )),
            );
        }

        if let Block::Dialogue(_) = block {
            let body = line
                .get(DIALOGUE_INDENT..)
                .unwrap_or_default()
                .trim_end();
            if body.len() > DIALOGUE_WIDTH {
                warnings.push(
                    FormatWarning::warning(
                        format!(
                            "dialogue runs {} columns past the {}-column width",
                            body.len() - DIALOGUE_WIDTH,
                            DIALOGUE_WIDTH
                        ),
                        span,
                        file_id,
                    )
                    .with_note("the editor re-wraps such lines on the next keystroke".to_string()),
                );
            }
        }
    }

    warnings
}
