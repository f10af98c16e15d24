use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use screenplay::format::{DIALOGUE_INDENT, DIALOGUE_WIDTH, TRANSITION_INDENT, center80, pad};

use crate::wrap::wrap_text;

/// The element kinds a user can insert from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Scene,
    Action,
    Character,
    Dialogue,
    Transition,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Scene,
        ElementKind::Action,
        ElementKind::Character,
        ElementKind::Dialogue,
        ElementKind::Transition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Scene => "scene",
            ElementKind::Action => "action",
            ElementKind::Character => "character",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Transition => "transition",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scene" => Ok(ElementKind::Scene),
            "action" => Ok(ElementKind::Action),
            "character" => Ok(ElementKind::Character),
            "dialogue" => Ok(ElementKind::Dialogue),
            "transition" => Ok(ElementKind::Transition),
            other => Err(format!("unknown element kind '{}'", other)),
        }
    }
}

/// Placeholder text for a new element, plus the relative range the caret
/// should select so the user can overtype it immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    pub select: Range<usize>,
}

/// Build the insertion snippet for an element kind.
pub fn build_snippet(kind: ElementKind) -> Snippet {
    match kind {
        ElementKind::Scene => Snippet {
            text: "INT. LOCATION - DAY\n\n".to_string(),
            select: 5..13,
        },

        ElementKind::Character => {
            let name = "CHARACTER NAME";
            let line = center80(name);
            let offset = line.len() - name.len();
            Snippet {
                text: format!("{}\n\n", line),
                select: offset..offset + name.len(),
            }
        }

        ElementKind::Dialogue => {
            let placeholder = "Dialogue goes here.";
            let wrapped = wrap_text(placeholder, DIALOGUE_WIDTH)
                .iter()
                .map(|l| pad(DIALOGUE_INDENT, l))
                .collect::<Vec<_>>()
                .join("\n");
            Snippet {
                text: format!("{}\n\n", wrapped),
                select: DIALOGUE_INDENT..DIALOGUE_INDENT + placeholder.len(),
            }
        }

        ElementKind::Action => Snippet {
            text: "Action description goes here.\n\n".to_string(),
            select: 0..28,
        },

        ElementKind::Transition => {
            let line = pad(TRANSITION_INDENT, "CUT TO:");
            Snippet {
                text: format!("{}\n\n", line),
                select: TRANSITION_INDENT..TRANSITION_INDENT + "CUT TO:".len(),
            }
        }
    }
}

/// An insert-element result: the spliced buffer and the absolute selection
/// over the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub content: String,
    pub select: Range<usize>,
}

/// Splice an element snippet into `content` at the given selection.
///
/// If the current line (text since the last newline before the selection)
/// holds anything non-whitespace, a line break is inserted first: a single
/// newline for dialogue, a blank line for every other kind. Nothing outside
/// the replaced selection is touched, and the returned selection always lies
/// inside the inserted snippet.
pub fn insert_element(
    kind: ElementKind,
    content: &str,
    selection: Range<usize>,
) -> Insertion {
    let snippet = build_snippet(kind);

    let before = &content[..selection.start];
    let current_line = match before.rfind('\n') {
        Some(nl) => &before[nl + 1..],
        None => before,
    };

    let separator = if current_line.trim().is_empty() {
        ""
    } else if kind == ElementKind::Dialogue {
        "\n"
    } else {
        "\n\n"
    };

    let mut new_content =
        String::with_capacity(content.len() + separator.len() + snippet.text.len());
    new_content.push_str(before);
    new_content.push_str(separator);
    new_content.push_str(&snippet.text);
    new_content.push_str(&content[selection.end..]);

    let base = selection.start + separator.len();
    Insertion {
        content: new_content,
        select: base + snippet.select.start..base + snippet.select.end,
    }
}
