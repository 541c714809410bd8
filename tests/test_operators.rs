// Intermediate operator tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rust_sequence_engine::Sequence;

#[test]
fn test_filter_keeps_matching_items() {
    let result = Sequence::from(vec![1, 2, 3, 4, 5])
        .filter(|x, _| x % 2 == 0)
        .to_vec();

    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_filter_index_counts_every_item_seen() {
    let indexes = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&indexes);
    Sequence::from(vec!["a", "b", "c", "d"])
        .filter(move |_, i| {
            seen.borrow_mut().push(i);
            true
        })
        .to_vec();

    // Indexes match original positions exactly
    assert_eq!(*indexes.borrow(), vec![0, 1, 2, 3]);

    // Filtered-out items still advance the index
    let indexes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&indexes);
    let kept = Sequence::from(vec![10, 11, 12, 13])
        .filter(|x, _| x % 2 == 0)
        .filter(move |_, i| {
            seen.borrow_mut().push(i);
            true
        })
        .to_vec();

    assert_eq!(kept, vec![10, 12]);
    assert_eq!(*indexes.borrow(), vec![0, 1]);
}

#[test]
fn test_select_projects_one_to_one_with_index() {
    let result = Sequence::from(vec!["a", "b", "c"])
        .select(|item, i| format!("{}{}", i, item))
        .to_vec();

    assert_eq!(result, vec!["0a", "1b", "2c"]);
}

#[test]
fn test_select_many_flattens_in_outer_then_inner_order() {
    let result = Sequence::from(vec![1, 2, 3])
        .select_many(|&n, _| Sequence::from(vec![n * 10, n * 10 + 1]))
        .to_vec();

    // Each inner run is exhausted before the next outer item
    assert_eq!(result, vec![10, 11, 20, 21, 30, 31]);
}

#[test]
fn test_select_many_supplies_the_outer_index() {
    let indexes = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&indexes);
    Sequence::from(vec!["x", "y", "z"])
        .select_many(move |_, i| {
            seen.borrow_mut().push(i);
            Sequence::from(vec![i])
        })
        .to_vec();

    assert_eq!(*indexes.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_select_many_with_combines_outer_and_inner() {
    let result = Sequence::from(vec!["a", "b"])
        .select_many_with(
            |_, _| Sequence::from(vec![1, 2]),
            |outer, inner| format!("{}{}", outer, inner),
        )
        .to_vec();

    assert_eq!(result, vec!["a1", "a2", "b1", "b2"]);
}

#[test]
fn test_select_many_handles_empty_inner_sequences() {
    let result = Sequence::from(vec![1, 2, 3])
        .select_many(|&n, _| {
            if n == 2 {
                Sequence::empty()
            } else {
                Sequence::from(vec![n])
            }
        })
        .to_vec();

    assert_eq!(result, vec![1, 3]);
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i32,
    category: &'static str,
}

#[test]
fn test_group_by_first_seen_key_order_and_source_order() {
    let items = vec![
        Item { id: 1, category: "A" },
        Item { id: 2, category: "B" },
        Item { id: 3, category: "A" },
    ];

    let groups = Sequence::from(items).group_by(|item| item.category).to_vec();

    // Two groups, in first-seen key order
    assert_eq!(groups.len(), 2);
    assert_eq!(*groups[0].key(), "A");
    assert_eq!(*groups[1].key(), "B");

    // Group members keep original source order
    let ids: Vec<i32> = groups[0].iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_group_by_select_transforms_group_members() {
    let items = vec![
        Item { id: 1, category: "A" },
        Item { id: 2, category: "B" },
        Item { id: 3, category: "A" },
    ];

    let groups = Sequence::from(items)
        .group_by_select(|item| item.category, |item| item.id)
        .to_vec();

    assert_eq!(groups[0].elements().to_vec(), vec![1, 3]);
    assert_eq!(groups[1].elements().to_vec(), vec![2]);
}

#[test]
fn test_group_by_yields_nothing_until_enumerated() {
    let calls = Rc::new(Cell::new(0));

    let key_calls = Rc::clone(&calls);
    let grouped = Sequence::from(vec![1, 2, 3]).group_by(move |x| {
        key_calls.set(key_calls.get() + 1);
        x % 2
    });

    assert_eq!(calls.get(), 0);
    grouped.to_vec();
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_take_boundary_laws() {
    let sequence = Sequence::from(vec![1, 2, 3]);

    assert_eq!(sequence.take(0).to_vec(), Vec::<i32>::new());
    assert_eq!(sequence.take(2).to_vec(), vec![1, 2]);
    assert_eq!(sequence.take(10).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_abandons_the_upstream_at_the_limit() {
    let pulled = Rc::new(Cell::new(0));

    let count = Rc::clone(&pulled);
    let result = Sequence::from(vec![1, 2, 3, 4, 5])
        .select(move |x, _| {
            count.set(count.get() + 1);
            x
        })
        .take(2)
        .to_vec();

    assert_eq!(result, vec![1, 2]);
    // The upstream was never pulled past the limit
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_skip_boundary_laws() {
    let sequence = Sequence::from(vec![1, 2, 3]);

    assert_eq!(sequence.skip(0).to_vec(), vec![1, 2, 3]);
    assert_eq!(sequence.skip(2).to_vec(), vec![3]);
    assert_eq!(sequence.skip(10).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_skip_take_composition_matches_a_slice() {
    let sequence = Sequence::from(vec![0, 1, 2, 3, 4, 5, 6]);

    assert_eq!(sequence.skip(2).take(3).to_vec(), vec![2, 3, 4]);
}
