use crate::LIST_HEADER;
use crate::render::{avatar_cell, render_json, render_row, render_text};

use roster_core::UserRecord;

#[test]
fn test_avatar_cell_uses_uri_when_present() {
    let user = UserRecord::new("1", "Ann", "Lee").with_avatar("https://example.com/a.jpg");
    assert_eq!(avatar_cell(&user), "https://example.com/a.jpg");
}

#[test]
fn test_avatar_cell_falls_back_to_initial() {
    let user = UserRecord::new("1", "ann", "Lee");
    assert_eq!(avatar_cell(&user), "[A]");
}

#[test]
fn test_avatar_cell_question_mark_for_empty_first_name() {
    let user = UserRecord::new("1", "", "Lee");
    assert_eq!(avatar_cell(&user), "[?]");
}

#[test]
fn test_render_row_layout() {
    let user = UserRecord::new("x", "Ann", "Lee");
    assert_eq!(render_row(&user), "[A]  Ann Lee  (x)");
}

#[test]
fn test_render_text_lists_rows_in_order() {
    let items = vec![
        UserRecord::new("x", "Ann", "Lee"),
        UserRecord::new("y", "Bob", "Ray"),
    ];

    let text = render_text(&items);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], LIST_HEADER);
    assert_eq!(lines[1], "[A]  Ann Lee  (x)");
    assert_eq!(lines[2], "[B]  Bob Ray  (y)");
    assert_eq!(lines[3], "2 user(s)");
}

#[test]
fn test_render_text_empty_list() {
    let text = render_text(&[]);
    assert!(text.contains("(no users)"));
}

#[test]
fn test_render_json_compact_matches_snapshot_format() {
    let items = vec![UserRecord::new("x", "Ann", "Lee")];

    let json = render_json(&items, false).unwrap();

    assert_eq!(json, roster_core::snapshot::encode(&items).unwrap());
}

#[test]
fn test_render_json_pretty_is_multiline() {
    let items = vec![UserRecord::new("x", "Ann", "Lee")];

    let json = render_json(&items, true).unwrap();

    assert!(json.contains('\n'));
    let parsed: Vec<UserRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, items);
}
