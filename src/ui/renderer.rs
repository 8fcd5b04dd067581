//! Plain-text rendering of a [`ViewModel`].
//!
//! One line per row, `>` marking the highlighted row, a checkbox, the label,
//! and `^n` for non-zero priority. The status line, if any, comes last.

use crate::ui::viewmodel::{DisplayItem, ViewModel};
use std::fmt::Write as _;

fn render_row(row: &DisplayItem) -> String {
    let marker = if row.is_highlighted { '>' } else { ' ' };
    let checkbox = if row.completed { "[x]" } else { "[ ]" };

    let mut line = format!("{marker} {checkbox} {}", row.label);
    if row.priority > 0 {
        let _ = write!(line, " ^{}", row.priority);
    }
    line
}

/// Renders the view model to a string, one line per row.
///
/// # Examples
///
/// ```
/// use keylist::ui::{projection::project, render};
/// use keylist::Item;
///
/// let items = vec![Item::new("2", "Huevos").with_priority(2)];
/// assert_eq!(render(&project(None, &items)), "  [ ] Huevos ^2\n");
/// ```
#[must_use]
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    if view.rows.is_empty() {
        out.push_str("  (no items)\n");
    }

    for row in &view.rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }

    if let Some(status) = &view.status {
        let _ = writeln!(out, "{status}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchState;
    use crate::domain::Item;
    use crate::ui::projection::project;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_search_with_highlight() {
        let items = vec![
            Item::new("1", "Huevos").with_quantity(12),
            Item::new("2", "Arroz").with_completed(true),
        ];
        let state = SearchState::search("o");
        let out = render(&project(Some(&state), &items));

        assert_eq!(out, "> [ ] Huevos (12)\n  [x] Arroz\nSearching: o\n");
    }

    #[test]
    fn renders_empty_list() {
        let state = SearchState::search("zz");
        let out = render(&project(Some(&state), &[]));
        assert_eq!(out, "  (no items)\nSearching: zz\n");
    }
}
