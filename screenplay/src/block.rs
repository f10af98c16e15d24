use serde::{Deserialize, Serialize};

/// One typed screenplay element with its text.
/// Blocks are the unit of storage; the editor works on rendered text and
/// only converts back at the save boundary.
///
/// The serde shape matches the stored document format:
/// `{"type": "sceneHeading", "text": "INT. OFFICE - DAY"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "camelCase")]
pub enum Block {
    /// A single heading line. Must begin with `INT.` or `EXT.` to survive a
    /// round trip through the text form.
    SceneHeading(String),
    /// A flush-left paragraph of scene description.
    Action(String),
    /// A speaker name, indented to the character column.
    Character(String),
    /// A speech line, indented to the dialogue column.
    Dialogue(String),
    /// A cut/fade direction, indented to the transition column.
    Transition(String),
}

impl Block {
    /// The element's text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            Block::SceneHeading(t)
            | Block::Action(t)
            | Block::Character(t)
            | Block::Dialogue(t)
            | Block::Transition(t) => t,
        }
    }

    /// The wire name of this element kind, as stored in documents.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::SceneHeading(_) => "sceneHeading",
            Block::Action(_) => "action",
            Block::Character(_) => "character",
            Block::Dialogue(_) => "dialogue",
            Block::Transition(_) => "transition",
        }
    }
}
