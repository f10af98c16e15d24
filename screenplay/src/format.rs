use crate::block::Block;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Spaces in from the left edge for dialogue lines.
pub const DIALOGUE_INDENT: usize = 20;
/// Max visible chars per dialogue line, after the indent.
pub const DIALOGUE_WIDTH: usize = 35;
/// Fixed left pad for character names. Equal to what centering
/// "CHARACTER NAME" on an 80-column page happens to produce, but rendering
/// always uses this fixed column, not per-name centering.
pub const CHARACTER_INDENT: usize = 33;
/// Fixed left pad for transitions.
pub const TRANSITION_INDENT: usize = 51;
/// Monospaced page width the layout assumes.
pub const PAGE_WIDTH: usize = 80;

/// Left-pad `s` with `n` spaces.
pub fn pad(n: usize, s: &str) -> String {
    let mut out = String::with_capacity(n + s.len());
    for _ in 0..n {
        out.push(' ');
    }
    out.push_str(s);
    out
}

/// Center `s` within the 80-column page by left padding.
/// Used by the editor's character snippet; the renderer itself pads to the
/// fixed character column.
pub fn center80(s: &str) -> String {
    pad(PAGE_WIDTH.saturating_sub(s.len()) / 2, s)
}

// ---------------------------------------------------------------------------
// Block -> text
// ---------------------------------------------------------------------------

/// Render a block sequence into the monospaced screenplay text form.
/// One line per block; an action block after any other block gets a blank
/// separating line. Pure function, no trailing processing beyond the join.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| match block {
            Block::SceneHeading(text) => text.clone(),
            Block::Action(text) => {
                if i > 0 {
                    format!("\n{}", text)
                } else {
                    text.clone()
                }
            }
            Block::Character(text) => pad(CHARACTER_INDENT, text),
            Block::Dialogue(text) => pad(DIALOGUE_INDENT, text),
            Block::Transition(text) => pad(TRANSITION_INDENT, text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Text -> block
// ---------------------------------------------------------------------------

/// Parse screenplay text back into blocks.
/// Splits on newlines (tolerating `\r\n`), drops empty lines, and classifies
/// each remaining line independently. Total: every line maps to some block;
/// text that ignores the column conventions degrades into a misclassified
/// block rather than an error.
pub fn text_to_blocks(text: &str) -> Vec<Block> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

/// Classify a single line by its leading-whitespace column.
///
/// The checks MUST run widest-first: a transition's 51 columns also satisfy
/// the character and dialogue thresholds, so reordering silently changes the
/// result for boundary inputs. Zero-indent lines split on the INT./EXT.
/// prefix; everything left is action.
pub fn classify_line(line: &str) -> Block {
    let indent = leading_whitespace(line);
    let text = line.trim().to_string();

    if indent >= TRANSITION_INDENT {
        Block::Transition(text)
    } else if indent >= CHARACTER_INDENT {
        Block::Character(text)
    } else if indent >= DIALOGUE_INDENT {
        Block::Dialogue(text)
    } else if line.starts_with("INT.") || line.starts_with("EXT.") {
        Block::SceneHeading(text)
    } else {
        Block::Action(text)
    }
}

/// Length of the leading whitespace run.
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
