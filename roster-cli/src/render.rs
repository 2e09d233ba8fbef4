use crate::LIST_HEADER;

use roster_core::UserRecord;

/// Avatar column: the thumbnail URI, or the bracketed initial when there is none.
pub fn avatar_cell(user: &UserRecord) -> String {
    match user.avatar {
        Some(ref uri) => uri.clone(),
        None => format!("[{}]", user.initial()),
    }
}

pub fn render_row(user: &UserRecord) -> String {
    format!(
        "{}  {}  ({})",
        avatar_cell(user),
        user.display_name(),
        user.id
    )
}

/// Header, one row per user, and a footer with the count.
pub fn render_text(items: &[UserRecord]) -> String {
    let mut out = String::new();
    out.push_str(LIST_HEADER);
    out.push('\n');

    if items.is_empty() {
        out.push_str("(no users)\n");
        return out;
    }

    for user in items {
        out.push_str(&render_row(user));
        out.push('\n');
    }
    out.push_str(&format!("{} user(s)\n", items.len()));
    out
}

pub fn render_json(items: &[UserRecord], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(items)
    } else {
        serde_json::to_string(items)
    }
}
