use screenplay::format::{DIALOGUE_INDENT, DIALOGUE_WIDTH, pad};

// ---------------------------------------------------------------------------
// Word wrapping
// ---------------------------------------------------------------------------

/// Hard-wrap a string to `width`, breaking on word boundaries.
/// Greedy: words accumulate until the next one would push the line past
/// `width`, then the line is flushed (right-trimmed) and a new one starts.
pub fn wrap_text(raw: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in raw.split(' ') {
        if line.len() + word.len() > width {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        line.push_str(word);
        line.push(' ');
    }
    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// A line is dialogue for wrapping purposes iff it carries the full
/// dialogue indent as literal spaces.
fn is_dialogue_line(line: &str) -> bool {
    line.len() >= DIALOGUE_INDENT && line.as_bytes()[..DIALOGUE_INDENT].iter().all(|b| *b == b' ')
}

/// Re-wrap one dialogue line if its de-indented, right-trimmed body runs
/// past the dialogue width. Returns None when the line passes through
/// unchanged.
fn rewrap_line(line: &str) -> Option<String> {
    if !is_dialogue_line(line) {
        return None;
    }
    let body = line[DIALOGUE_INDENT..].trim_end();
    if body.len() <= DIALOGUE_WIDTH {
        return None;
    }
    Some(
        wrap_text(body, DIALOGUE_WIDTH)
            .iter()
            .map(|l| pad(DIALOGUE_INDENT, l))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

// ---------------------------------------------------------------------------
// The wrap pass
// ---------------------------------------------------------------------------

/// Result of an auto-wrap pass: the re-flowed buffer and the caret offset
/// remapped into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOutcome {
    pub text: String,
    pub caret: usize,
}

/// Re-flow every over-long dialogue line in the buffer. Non-dialogue lines
/// and short dialogue lines pass through untouched; the pass is total and a
/// no-op on already-wrapped text.
pub fn auto_wrap(text: &str) -> String {
    text.split('\n')
        .map(|line| rewrap_line(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-flow the buffer and carry the caret along with it.
///
/// The caret keeps its logical position in the typed text: break characters
/// the wrap inserts before it push it forward, ones after it leave it alone.
/// Inside the line being wrapped the mapping is word-granular, so the common
/// case (typing at the end of an over-long line) lands the caret at the end
/// of the last wrapped line.
pub fn auto_wrap_with_caret(text: &str, caret: usize) -> WrapOutcome {
    let mut out = String::with_capacity(text.len());
    let mut new_caret = None;
    let mut line_start = 0;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line_end = line_start + line.len();
        let out_start = out.len();
        let caret_here = new_caret.is_none() && caret >= line_start && caret <= line_end;

        match rewrap_line(line) {
            Some(replacement) => {
                if caret_here {
                    new_caret =
                        Some(out_start + remap_column(line, &replacement, caret - line_start));
                }
                out.push_str(&replacement);
            }
            None => {
                if caret_here {
                    new_caret = Some(out_start + (caret - line_start));
                }
                out.push_str(line);
            }
        }
        line_start = line_end + 1;
    }

    let caret = new_caret.unwrap_or(out.len()).min(out.len());
    WrapOutcome { text: out, caret }
}

/// Map a column within an over-long dialogue line to the matching offset in
/// its wrapped replacement.
///
/// Re-simulates the greedy pass to learn where each word of the body lands,
/// then follows the word containing the column. Columns inside the indent
/// map to themselves; columns in the trimmed tail clamp to the end.
fn remap_column(line: &str, replacement: &str, col: usize) -> usize {
    if col <= DIALOGUE_INDENT {
        return col;
    }
    let body = line[DIALOGUE_INDENT..].trim_end();
    let body_col = col - DIALOGUE_INDENT;
    if body_col >= body.len() {
        return replacement.len();
    }

    let words: Vec<&str> = body.split(' ').collect();

    // Input offset of each word within the body.
    let mut word_starts = Vec::with_capacity(words.len());
    let mut pos = 0;
    for word in &words {
        word_starts.push(pos);
        pos += word.len() + 1;
    }

    // Where the greedy pass puts each word: (wrapped line index, column).
    // Mirrors wrap_text exactly, including the flush of a building line
    // that still holds only trailing spaces.
    let mut placements = Vec::with_capacity(words.len());
    let mut line_idx = 0;
    let mut cur = 0;
    for word in &words {
        if cur + word.len() > DIALOGUE_WIDTH {
            line_idx += 1;
            cur = 0;
        }
        placements.push((line_idx, cur));
        cur += word.len() + 1;
    }

    // Offset of each wrapped line within the replacement text.
    let mut line_offsets = Vec::new();
    let mut offset = 0;
    for part in replacement.split('\n') {
        line_offsets.push(offset);
        offset += part.len() + 1;
    }

    for (k, word) in words.iter().enumerate() {
        // A column on the separating space after word k counts as its end.
        if body_col <= word_starts[k] + word.len() {
            let within = body_col.saturating_sub(word_starts[k]);
            let (wrapped_line, wrapped_col) = placements[k];
            let base = line_offsets
                .get(wrapped_line)
                .copied()
                .unwrap_or(replacement.len());
            return (base + DIALOGUE_INDENT + wrapped_col + within).min(replacement.len());
        }
    }

    replacement.len()
}
