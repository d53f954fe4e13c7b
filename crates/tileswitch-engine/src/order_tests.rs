use super::*;
use crate::tile::TileRect;

fn ind(id: &str) -> TileRecord {
    TileRecord::new(id, format!("Stream {}", id), TileKind::Individual, TileRect::default())
}

fn grid(id: &str) -> TileRecord {
    TileRecord::new(id, "GRID", TileKind::Grid, TileRect::default())
}

fn ids(entries: &[StreamEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_first_scan_assigns_slots_in_scan_order() {
    let mut book = OrderBook::default();
    let out = book.order(&[ind("a"), ind("b"), ind("c")]);
    assert_eq!(ids(&out), vec!["a", "b", "c"]);
    assert_eq!(book.slot_of("a"), Some(0));
    assert_eq!(book.slot_of("c"), Some(2));
}

#[test]
fn test_newcomer_individuals_get_slots_before_grids() {
    let mut book = OrderBook::default();
    let out = book.order(&[grid("g"), ind("a"), ind("b")]);
    assert_eq!(ids(&out), vec!["a", "b", "g"]);
    assert_eq!(book.slot_of("a"), Some(0));
    assert_eq!(book.slot_of("b"), Some(1));
    assert_eq!(book.slot_of("g"), Some(2));
}

#[test]
fn test_grid_always_last_even_with_lower_slot() {
    let mut book = OrderBook::default();
    book.order(&[grid("g")]);
    assert_eq!(book.slot_of("g"), Some(0));

    let out = book.order(&[grid("g"), ind("a"), ind("b")]);
    assert_eq!(ids(&out), vec!["a", "b", "g"]);
}

#[test]
fn test_reordered_scan_keeps_positions() {
    let mut book = OrderBook::default();
    book.order(&[ind("a"), ind("b"), ind("c")]);
    let out = book.order(&[ind("c"), ind("a"), ind("b")]);
    assert_eq!(ids(&out), vec!["a", "b", "c"]);
}

#[test]
fn test_relative_position_survives_newcomers() {
    let mut book = OrderBook::default();
    book.order(&[ind("a"), ind("b")]);
    let out = book.order(&[ind("x"), ind("b"), ind("a"), ind("y")]);
    assert_eq!(ids(&out), vec!["a", "b", "x", "y"]);
}

#[test]
fn test_absent_id_keeps_its_slot_by_default() {
    let mut book = OrderBook::default();
    book.order(&[ind("a"), ind("b"), ind("c")]);

    let out = book.order(&[ind("a"), ind("c"), ind("d")]);
    assert_eq!(ids(&out), vec!["a", "c", "d"]);
    // d must not reuse b's slot while b is still tracked.
    assert_eq!(book.slot_of("b"), Some(1));
    assert_eq!(book.slot_of("d"), Some(3));

    let out = book.order(&[ind("d"), ind("b"), ind("a"), ind("c")]);
    assert_eq!(ids(&out), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_slots_unique_across_tracked_ids() {
    let mut book = OrderBook::default();
    book.order(&[ind("a"), ind("b")]);
    book.order(&[ind("c")]);
    book.order(&[ind("d"), grid("g")]);

    let mut slots: Vec<usize> = ["a", "b", "c", "d", "g"]
        .iter()
        .map(|id| book.slot_of(id).unwrap())
        .collect();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), 5);
}

#[test]
fn test_eviction_after_absent_refreshes() {
    let mut book = OrderBook::new(EvictionPolicy::AfterAbsentRefreshes(2));
    book.order(&[ind("a"), ind("b")]);

    book.order(&[ind("a")]);
    assert_eq!(book.slot_of("b"), Some(1));

    book.order(&[ind("a")]);
    assert_eq!(book.slot_of("b"), None);

    // The freed slot is available again.
    book.order(&[ind("a"), ind("c")]);
    assert_eq!(book.slot_of("c"), Some(1));
}

#[test]
fn test_reappearance_resets_absence_count() {
    let mut book = OrderBook::new(EvictionPolicy::AfterAbsentRefreshes(2));
    book.order(&[ind("a"), ind("b")]);
    book.order(&[ind("a")]);
    book.order(&[ind("a"), ind("b")]);
    book.order(&[ind("a")]);
    assert_eq!(book.slot_of("b"), Some(1));
}

#[test]
fn test_policy_from_zero_is_never() {
    assert_eq!(EvictionPolicy::from_absent_refreshes(0), EvictionPolicy::Never);
    assert_eq!(
        EvictionPolicy::from_absent_refreshes(3),
        EvictionPolicy::AfterAbsentRefreshes(3)
    );
}

#[test]
fn test_empty_scan_yields_empty_list() {
    let mut book = OrderBook::default();
    book.order(&[ind("a")]);
    assert!(book.order(&[]).is_empty());
    assert_eq!(book.len(), 1);
}
