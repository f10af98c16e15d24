pub mod session;
pub mod snippet;
pub mod viewport;
pub mod wrap;

pub use session::EditorSession;
pub use snippet::{ElementKind, Insertion, Snippet, build_snippet, insert_element};
pub use viewport::{Viewport, caret_line, centered_scroll};
pub use wrap::{WrapOutcome, auto_wrap, auto_wrap_with_caret, wrap_text};
