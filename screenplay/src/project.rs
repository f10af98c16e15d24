use serde::{Deserialize, Serialize};

use crate::activity::WritingLog;
use crate::block::Block;
use crate::format::{blocks_to_text, text_to_blocks};

/// Author metadata shown on the title page. Field names follow the stored
/// document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePage {
    pub author_name: String,
    pub author_address: String,
    pub author_city: String,
    pub author_phone: String,
    pub author_email: String,
}

impl Default for TitlePage {
    fn default() -> Self {
        TitlePage {
            author_name: "Author Name".to_string(),
            author_address: "Author's Address".to_string(),
            author_city: "City, State ZIP".to_string(),
            author_phone: "(555) 555-5555".to_string(),
            author_email: "author@example.com".to_string(),
        }
    }
}

/// A named unit of the screenplay holding one contiguous text buffer.
/// The buffer, not a block list, is the live-edit source of truth; blocks
/// exist only in the stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub id: String,
    pub content: String,
}

/// An open screenplay project: title, title page, scenes, activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct Screenplay {
    pub title: String,
    pub title_page: TitlePage,
    pub scenes: Vec<Scene>,
    pub activity: WritingLog,
    next_scene: usize,
}

impl Screenplay {
    pub fn new(title: impl Into<String>) -> Self {
        Screenplay {
            title: title.into(),
            title_page: TitlePage::default(),
            scenes: Vec::new(),
            activity: WritingLog::new(),
            next_scene: 1,
        }
    }

    /// Append a fresh empty scene and return its id.
    pub fn add_scene(&mut self) -> &mut Scene {
        let id = format!("scene-{}", self.next_scene);
        self.next_scene += 1;
        self.scenes.push(Scene {
            id,
            content: String::new(),
        });
        self.scenes.last_mut().expect("scene just pushed")
    }

    /// Remove a scene by id. Removing an unknown id is a no-op.
    pub fn delete_scene(&mut self, id: &str) {
        self.scenes.retain(|s| s.id != id);
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn scene_mut(&mut self, id: &str) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id == id)
    }

    /// Convert to the stored document form. Each scene buffer is parsed into
    /// blocks exactly once, at this boundary.
    pub fn to_doc(&self) -> ScreenplayDoc {
        ScreenplayDoc {
            screenplay_title: self.title.clone(),
            title_page: self.title_page.clone(),
            scenes: self
                .scenes
                .iter()
                .map(|s| SceneDoc {
                    id: s.id.clone(),
                    blocks: text_to_blocks(&s.content),
                })
                .collect(),
            activity: self.activity.clone(),
        }
    }
}

/// One stored scene: an id and its block array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDoc {
    pub id: String,
    pub blocks: Vec<Block>,
}

/// The stored document form of a whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenplayDoc {
    pub screenplay_title: String,
    #[serde(flatten)]
    pub title_page: TitlePage,
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    #[serde(default)]
    pub activity: WritingLog,
}

impl ScreenplayDoc {
    /// Open the stored form for editing. Each block array is rendered to
    /// text exactly once, at this boundary; the editor never re-parses
    /// mid-edit.
    pub fn open(&self) -> Screenplay {
        let next_scene = next_scene_counter(&self.scenes);
        Screenplay {
            title: self.screenplay_title.clone(),
            title_page: self.title_page.clone(),
            scenes: self
                .scenes
                .iter()
                .map(|s| Scene {
                    id: s.id.clone(),
                    content: blocks_to_text(&s.blocks),
                })
                .collect(),
            activity: self.activity.clone(),
            next_scene,
        }
    }
}

/// Pick the scene counter up past any `scene-N` ids already present, so
/// reopened projects keep minting unique ids.
fn next_scene_counter(scenes: &[SceneDoc]) -> usize {
    scenes
        .iter()
        .filter_map(|s| s.id.strip_prefix("scene-"))
        .filter_map(|n| n.parse::<usize>().ok())
        .max()
        .map(|n| n + 1)
        .unwrap_or(1)
}
