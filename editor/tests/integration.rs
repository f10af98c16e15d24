use editor::session::EditorSession;
use editor::snippet::{ElementKind, build_snippet, insert_element};
use editor::viewport::{Viewport, caret_line, centered_scroll};
use editor::wrap::{auto_wrap, auto_wrap_with_caret, wrap_text};

use screenplay::block::Block;
use screenplay::format::{DIALOGUE_INDENT, DIALOGUE_WIDTH, pad};

/// A dialogue body that wraps to exactly two lines at width 35.
const TWO_LINE_BODY: &str = "one two three four five six seven eight";

fn viewport() -> Viewport {
    Viewport {
        line_height: 20.0,
        height: 200.0,
        content_height: 2000.0,
    }
}

// ---------------------------------------------------------------------------
// Snippets and insertion
// ---------------------------------------------------------------------------

#[test]
fn snippet_offsets() {
    let scene = build_snippet(ElementKind::Scene);
    assert_eq!(scene.text, "INT. LOCATION - DAY\n\n");
    assert_eq!(&scene.text[scene.select.clone()], "LOCATION");

    let character = build_snippet(ElementKind::Character);
    assert_eq!(character.select, 33..47);
    assert_eq!(&character.text[character.select.clone()], "CHARACTER NAME");

    let dialogue = build_snippet(ElementKind::Dialogue);
    assert_eq!(dialogue.text, format!("{}\n\n", pad(20, "Dialogue goes here.")));
    assert_eq!(&dialogue.text[dialogue.select.clone()], "Dialogue goes here.");

    let action = build_snippet(ElementKind::Action);
    assert_eq!(action.select, 0..28);

    let transition = build_snippet(ElementKind::Transition);
    assert_eq!(transition.select, 51..58);
    assert_eq!(&transition.text[transition.select.clone()], "CUT TO:");
}

#[test]
fn insert_on_blank_line_adds_no_separator() {
    let result = insert_element(ElementKind::Scene, "", 0..0);
    assert_eq!(result.content, "INT. LOCATION - DAY\n\n");
    assert_eq!(result.select, 5..13);
    assert_eq!(&result.content[result.select], "LOCATION");
}

#[test]
fn insert_dialogue_on_nonblank_line_breaks_once() {
    let content = "Some action text";
    let at = content.len();
    let result = insert_element(ElementKind::Dialogue, content, at..at);
    let expected = format!("Some action text\n{}\n\n", pad(20, "Dialogue goes here."));
    assert_eq!(result.content, expected);
    assert_eq!(result.select, at + 1 + 20..at + 1 + 39);
    assert_eq!(&result.content[result.select], "Dialogue goes here.");
}

#[test]
fn insert_action_on_nonblank_line_breaks_twice() {
    let content = "Some action text";
    let at = content.len();
    let result = insert_element(ElementKind::Action, content, at..at);
    assert_eq!(
        result.content,
        "Some action text\n\nAction description goes here.\n\n"
    );
    assert_eq!(result.select, at + 2..at + 2 + 28);
}

#[test]
fn insert_on_whitespace_only_line_counts_as_blank() {
    let content = "INT. OFFICE - DAY\n   ";
    let at = content.len();
    let result = insert_element(ElementKind::Transition, content, at..at);
    assert!(result.content.starts_with("INT. OFFICE - DAY\n   "));
    // No separator: the snippet lands right at the selection.
    assert_eq!(result.select, at + 51..at + 58);
}

#[test]
fn insert_replaces_only_the_selection() {
    let content = "abc SELECTED def";
    let result = insert_element(ElementKind::Scene, content, 4..12);
    assert!(result.content.starts_with("abc "));
    assert!(result.content.ends_with(" def"));
    assert!(result.content.contains("INT. LOCATION - DAY"));
}

// ---------------------------------------------------------------------------
// Wrapping
// ---------------------------------------------------------------------------

#[test]
fn wrap_text_packs_greedily() {
    assert_eq!(
        wrap_text(TWO_LINE_BODY, DIALOGUE_WIDTH),
        vec![
            "one two three four five six seven".to_string(),
            "eight".to_string(),
        ]
    );
    // Short input stays on one line.
    assert_eq!(wrap_text("short", DIALOGUE_WIDTH), vec!["short".to_string()]);
}

#[test]
fn wrap_breaks_only_at_spaces_and_keeps_every_word() {
    let body = "This is a very long line of dialogue that definitely \
                exceeds thirty five characters in width";
    let lines = wrap_text(body, DIALOGUE_WIDTH);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.len() <= DIALOGUE_WIDTH, "line too long: {:?}", line);
    }
    let rejoined = lines.join(" ");
    assert_eq!(
        rejoined.split_whitespace().collect::<Vec<_>>(),
        body.split_whitespace().collect::<Vec<_>>()
    );
}

#[test]
fn auto_wrap_reflows_only_overlong_dialogue() {
    let text = format!(
        "INT. OFFICE - DAY\n\n{}\n{}",
        pad(33, "MARGE"),
        pad(DIALOGUE_INDENT, TWO_LINE_BODY)
    );
    let wrapped = auto_wrap(&text);
    let expected = format!(
        "INT. OFFICE - DAY\n\n{}\n{}\n{}",
        pad(33, "MARGE"),
        pad(DIALOGUE_INDENT, "one two three four five six seven"),
        pad(DIALOGUE_INDENT, "eight"),
    );
    assert_eq!(wrapped, expected);
}

#[test]
fn auto_wrap_is_idempotent() {
    let text = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    let once = auto_wrap(&text);
    let twice = auto_wrap(&once);
    assert_ne!(text, once);
    assert_eq!(once, twice);

    // Every wrapped line carries the dialogue indent and fits the width.
    for line in once.split('\n') {
        assert!(line.starts_with(&pad(DIALOGUE_INDENT, "")));
        assert!(line[DIALOGUE_INDENT..].len() <= DIALOGUE_WIDTH);
    }
}

#[test]
fn auto_wrap_leaves_short_dialogue_alone() {
    let text = pad(DIALOGUE_INDENT, "Just a short line.");
    assert_eq!(auto_wrap(&text), text);
    assert_eq!(auto_wrap(""), "");
}

// ---------------------------------------------------------------------------
// Caret remapping
// ---------------------------------------------------------------------------

#[test]
fn caret_at_end_follows_the_wrap() {
    let text = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    let outcome = auto_wrap_with_caret(&text, text.len());
    assert_eq!(outcome.caret, outcome.text.len());
}

#[test]
fn caret_before_the_wrap_point_stays_put() {
    let text = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    // Caret at the end of "one": column 20 + 3.
    let caret = DIALOGUE_INDENT + 3;
    let outcome = auto_wrap_with_caret(&text, caret);
    assert_eq!(outcome.caret, caret);
}

#[test]
fn caret_in_a_pushed_word_moves_with_it() {
    let text = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    // Two bytes into "eight", which wraps onto the second line.
    let caret = DIALOGUE_INDENT + 34 + 2;
    let outcome = auto_wrap_with_caret(&text, caret);

    let first_line_len = DIALOGUE_INDENT + "one two three four five six seven".len();
    assert_eq!(outcome.caret, first_line_len + 1 + DIALOGUE_INDENT + 2);
    assert_eq!(&outcome.text[outcome.caret - 2..outcome.caret], "ei");
}

#[test]
fn caret_after_a_wrapped_line_shifts_by_the_delta() {
    let line = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    let text = format!("{}\nShe hesitates.", line);
    // Caret 4 bytes into the second line.
    let caret = line.len() + 1 + 4;
    let outcome = auto_wrap_with_caret(&text, caret);

    let delta = auto_wrap(&line).len() - line.len();
    assert_eq!(outcome.caret, caret + delta);
    assert_eq!(&outcome.text[outcome.caret - 4..outcome.caret], "She ");
}

#[test]
fn caret_before_any_wrap_is_untouched() {
    let line = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    let text = format!("INT. OFFICE - DAY\n{}", line);
    let outcome = auto_wrap_with_caret(&text, 4);
    assert_eq!(outcome.caret, 4);
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

#[test]
fn caret_line_counts_newlines() {
    assert_eq!(caret_line("", 0), 0);
    assert_eq!(caret_line("ab\ncd\nef", 1), 0);
    assert_eq!(caret_line("ab\ncd\nef", 3), 1);
    assert_eq!(caret_line("ab\ncd\nef", 8), 2);
    // Out-of-range carets clamp.
    assert_eq!(caret_line("ab\ncd", 99), 1);
}

#[test]
fn centered_scroll_clamps_to_the_scrollable_range() {
    let vp = viewport();
    // Near the top: centering would go negative.
    assert_eq!(centered_scroll(&vp, 0), 0.0);
    // Middle: line 50 sits at 1000px, minus half the viewport plus half a line.
    assert_eq!(centered_scroll(&vp, 50), 50.0 * 20.0 - 100.0 + 10.0);
    // Past the bottom: clamps to max scroll.
    assert_eq!(centered_scroll(&vp, 1000), vp.max_scroll());
}

// ---------------------------------------------------------------------------
// Session: the two-phase contract
// ---------------------------------------------------------------------------

#[test]
fn session_round_trips_blocks_at_the_boundaries() {
    let blocks = vec![
        Block::SceneHeading("INT. OFFICE - DAY".to_string()),
        Block::Action("Marge types.".to_string()),
        Block::Dialogue("Here we go.".to_string()),
    ];
    let session = EditorSession::from_blocks(&blocks);
    assert_eq!(session.blocks(), blocks);
}

#[test]
fn insertion_stages_the_caret_until_after_render() {
    let mut session = EditorSession::new("");
    session.insert_element(ElementKind::Scene);

    // Phase one: content committed, caret not yet applied.
    assert_eq!(session.content(), "INT. LOCATION - DAY\n\n");
    assert!(session.has_pending_caret());
    assert_eq!(session.selection(), 0..0);

    // Phase two: selection lands on the placeholder.
    session.after_render(&viewport());
    assert!(!session.has_pending_caret());
    assert_eq!(session.selection(), 5..13);
}

#[test]
fn wrapping_keystroke_stages_the_remapped_caret() {
    let mut session = EditorSession::new("");
    let raw = pad(DIALOGUE_INDENT, TWO_LINE_BODY);
    session.apply_keystroke(&raw, raw.len());

    assert_eq!(session.content(), auto_wrap(&raw));
    assert!(session.has_pending_caret());

    session.after_render(&viewport());
    let end = session.content().len();
    assert_eq!(session.selection(), end..end);
}

#[test]
fn non_wrapping_keystroke_places_the_caret_directly() {
    let mut session = EditorSession::new("");
    session.apply_keystroke("INT. O", 6);
    assert_eq!(session.content(), "INT. O");
    assert!(!session.has_pending_caret());
    assert_eq!(session.selection(), 6..6);
}

#[test]
fn after_render_recenters_on_the_caret_line() {
    let mut session = EditorSession::new("");
    // Sixty short action lines, then a keystroke at the bottom.
    let raw = vec!["He waits."; 60].join("\n");
    let caret = raw.len();
    session.apply_keystroke(&raw, caret);
    session.after_render(&viewport());

    let line = caret_line(session.content(), caret);
    assert_eq!(line, 59);
    assert_eq!(session.scroll_top(), centered_scroll(&viewport(), 59));
    assert!(session.scroll_top() > 0.0);
}

#[test]
fn session_insert_respects_current_selection() {
    let mut session = EditorSession::new("INT. OFFICE - DAY");
    session.set_selection(17..17);
    session.insert_element(ElementKind::Character);
    session.after_render(&viewport());

    // Non-blank line: blank-line separator, then the padded name.
    let expected_start = 17 + 2 + 33;
    assert_eq!(session.selection(), expected_start..expected_start + 14);
    let sel = session.selection();
    assert_eq!(&session.content()[sel], "CHARACTER NAME");
}
