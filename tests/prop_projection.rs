use proptest::prelude::*;

use keylist::ui::filter_and_sort;
use keylist::Item;

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((any::<bool>(), 0u32..4, "[A-Za-z]{1,5}"), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (completed, priority, name))| {
                Item::new(i.to_string(), name)
                    .with_completed(completed)
                    .with_priority(priority)
            })
            .collect()
    })
}

fn index(item: &Item) -> usize {
    item.id.as_str().parse().unwrap()
}

proptest! {
    #[test]
    fn ordering_is_grouped_ranked_and_stable(items in items_strategy(), query in "[a-z]{0,2}") {
        let once = filter_and_sort(&items, &query);
        let twice = filter_and_sort(&items, &query);
        prop_assert_eq!(&once, &twice);

        for pair in once.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(!(a.completed && !b.completed), "completed before incomplete");
            if a.completed == b.completed {
                prop_assert!(a.priority >= b.priority);
                if a.priority == b.priority {
                    prop_assert!(index(a) < index(b), "unstable order");
                }
            }
        }
    }

    #[test]
    fn filter_keeps_exactly_the_matches(items in items_strategy(), query in "[A-Za-z]{0,2}") {
        let shown = filter_and_sort(&items, &query);
        let needle = query.to_lowercase();
        let expected = items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .count();

        prop_assert_eq!(shown.len(), expected);
        prop_assert!(shown.iter().all(|i| i.name.to_lowercase().contains(&needle)));
    }
}
