//! Human-readable summary renderer for redlines.

use crate::model::EntityKind;
use crate::redline::model::{ChangeType, RedlineResult};

const ABSENT: &str = "(none)";

/// Render a Markdown summary of a [`RedlineResult`].
///
/// Intended for review displays. Rows follow the order of `result.changes`.
pub fn render_human_summary(kind: EntityKind, result: &RedlineResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {} Redline\n\n", kind));
    out.push_str(&format!(
        "**Versions**: {} → {}\n\n",
        result.old_version, result.new_version
    ));

    if result.is_empty() {
        out.push_str("_No changes between versions._\n");
        return out;
    }

    out.push_str(&format!(
        "**Changes**: {} ({} added, {} removed, {} modified)\n\n",
        result.changes.len(),
        result.count_by_type(ChangeType::Added),
        result.count_by_type(ChangeType::Removed),
        result.count_by_type(ChangeType::Modified),
    ));

    out.push_str("| Field | Change | Old | New |\n|---|---|---|---|\n");
    for change in &result.changes {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            change.field,
            change.change_type,
            cell(change.old_value.as_deref()),
            cell(change.new_value.as_deref()),
        ));
    }

    out
}

/// Make a value safe for a single Markdown table cell
fn cell(value: Option<&str>) -> String {
    match value {
        None => ABSENT.to_string(),
        Some(v) => v.replace('|', "\\|").replace("\r\n", "<br>").replace('\n', "<br>"),
    }
}
