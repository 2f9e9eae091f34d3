//! Tests for subtree range lookup.

use std::collections::BTreeMap;

use ctxmap::path::{PathKey, is_past_subtree, subtree_range};

fn container(keys: &[&str]) -> BTreeMap<PathKey, usize> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| (PathKey::parse(key).unwrap(), i))
        .collect()
}

fn range_keys<'a>(map: &'a BTreeMap<PathKey, usize>, start: &str) -> Vec<&'a str> {
    subtree_range(map, start)
        .map(|(key, _)| key.as_str())
        .collect()
}

#[test]
fn test_range_contains_exactly_the_subtree() {
    let map = container(&["/P", "/P/x", "/P/x/y", "/P_sibling", "/Pa", "/O/P"]);
    assert_eq!(range_keys(&map, "/P"), vec!["/P", "/P/x", "/P/x/y"]);
}

#[test]
fn test_nested_range() {
    let map = container(&["/P", "/P/x", "/P/x/y", "/P/x_z", "/P/y"]);
    assert_eq!(range_keys(&map, "/P/x"), vec!["/P/x", "/P/x/y"]);
}

#[test]
fn test_range_of_missing_path_is_empty() {
    let map = container(&["/a", "/c"]);
    assert!(range_keys(&map, "/b").is_empty());
    assert!(range_keys(&map, "/zzz").is_empty());
}

#[test]
fn test_range_of_root_is_everything() {
    let map = container(&["/a", "/a/b", "/b"]);
    assert_eq!(range_keys(&map, ""), vec!["/a", "/a/b", "/b"]);
}

#[test]
fn test_range_on_empty_container() {
    let map = container(&[]);
    assert!(range_keys(&map, "/a").is_empty());
    assert!(range_keys(&map, "").is_empty());
}

#[test]
fn test_range_stops_at_boundary() {
    let map = container(&["/a/x", "/a0", "/a/y"]);
    let mut range = subtree_range(&map, "/a");
    assert_eq!(range.next().map(|(key, _)| key.as_str()), Some("/a/x"));
    assert_eq!(range.next().map(|(key, _)| key.as_str()), Some("/a/y"));
    assert!(range.next().is_none());
    assert!(range.next().is_none());
}

#[test]
fn test_is_past_subtree() {
    assert!(!is_past_subtree("/a", "/a/b"));
    assert!(is_past_subtree("/a", "/a.b"));
    assert!(is_past_subtree("/a", "/b"));
}

#[test]
fn test_range_does_not_borrow_start() {
    let map = container(&["/a", "/a/x", "/ab"]);
    let mut range = {
        let start = String::from("/a");
        subtree_range(&map, &start)
    };
    assert_eq!(range.next().map(|(key, _)| key.as_str()), Some("/a"));
    assert_eq!(range.next().map(|(key, _)| key.as_str()), Some("/a/x"));
    assert!(range.next().is_none());
}
