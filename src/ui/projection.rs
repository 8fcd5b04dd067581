//! View projection: which items are shown, in what order, and which one is
//! highlighted.
//!
//! Everything here is a pure function of the search state and the item
//! collection and is recomputed after every event.
//!
//! # Ordering
//!
//! 1. Keep items whose name contains the search text, ignoring case
//! 2. Incomplete items before completed ones
//! 3. Higher priority first within each group
//! 4. Ties keep collection order (stable sort)

use crate::app::modes::{Mode, SearchState};
use crate::domain::Item;
use crate::ui::viewmodel::{DisplayItem, StatusLine, ViewModel};

fn matches_query(item: &Item, query_lower: &str) -> bool {
    query_lower.is_empty() || item.name.to_lowercase().contains(query_lower)
}

/// Sorts in place by completion then descending priority, stably.
pub fn sort_items(items: &mut [&Item]) {
    items.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.priority.cmp(&a.priority))
    });
}

/// Filters `items` by `query` and sorts the result.
///
/// # Examples
///
/// ```
/// use keylist::ui::projection::filter_and_sort;
/// use keylist::Item;
///
/// let items = vec![
///     Item::new("1", "Arroz").with_completed(true),
///     Item::new("2", "Huevos").with_priority(2),
///     Item::new("3", "Aceite"),
/// ];
/// let names: Vec<_> = filter_and_sort(&items, "").iter().map(|i| i.name.as_str()).collect();
/// assert_eq!(names, ["Huevos", "Aceite", "Arroz"]);
/// ```
#[must_use]
pub fn filter_and_sort<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let _span = tracing::trace_span!("filter_and_sort",
        total_items = items.len(),
        query_len = query.len()
    )
    .entered();

    let query_lower = query.to_lowercase();
    let mut visible: Vec<&Item> = items
        .iter()
        .filter(|item| matches_query(item, &query_lower))
        .collect();

    sort_items(&mut visible);

    tracing::trace!(visible_count = visible.len(), "items filtered");
    visible
}

/// First item of the filtered view, but only while a non-empty search is
/// active.
#[must_use]
pub fn highlighted_candidate<'a>(items: &'a [Item], query: &str) -> Option<&'a Item> {
    if query.is_empty() {
        return None;
    }
    filter_and_sort(items, query).into_iter().next()
}

/// Projects the full view model for the current state.
#[must_use]
pub fn project(state: Option<&SearchState>, items: &[Item]) -> ViewModel {
    let mode = Mode::of(state, items);
    let query = state.map_or("", |s| s.text.as_str());

    let status = state.map(|s| StatusLine {
        editing: mode == Mode::Editing,
        text: s.text.clone(),
    });

    if let Some(editing) = state.and_then(|s| s.editing_item(items)) {
        return ViewModel {
            mode,
            rows: vec![DisplayItem::from_item(editing, true)],
            highlighted: Some(editing.id.clone()),
            status,
        };
    }

    let highlighted = highlighted_candidate(items, query).map(|item| item.id.clone());

    let rows = filter_and_sort(items, query)
        .into_iter()
        .map(|item| DisplayItem::from_item(item, highlighted.as_ref() == Some(&item.id)))
        .collect();

    ViewModel {
        mode,
        rows,
        highlighted,
        status,
    }
}
