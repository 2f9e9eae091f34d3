//! Tests for the separator-first key ordering.

use std::{cmp::Ordering, collections::BTreeMap};

use ctxmap::path::{PathKey, compare_paths, path_less};

#[test]
fn test_subtree_sorts_before_textual_sibling() {
    assert!(path_less("/a", "/a/b"));
    assert!(path_less("/a/b", "/a_b"));
    assert!(path_less("/a", "/a_b"));
    assert!(path_less("/a/zzz", "/a_b"));
    assert!(!path_less("/a_b", "/a/b"));
}

#[test]
fn test_equal_paths() {
    assert_eq!(compare_paths("/a/b/c", "/a/b/c"), Ordering::Equal);
    assert!(!path_less("/a", "/a"));
}

#[test]
fn test_ordinary_characters_compare_bytewise() {
    assert_eq!(compare_paths("/abc", "/abd"), Ordering::Less);
    assert_eq!(compare_paths("/B", "/a"), Ordering::Less);
    assert_eq!(compare_paths("/b", "/a/z"), Ordering::Greater);
}

#[test]
fn test_empty_key_sorts_first() {
    assert!(path_less("", "/"));
    assert!(path_less("", "/a"));
}

#[test]
fn test_ordering_is_antisymmetric() {
    let keys = ["", "/a", "/a/b", "/a-b", "/a_b", "/a/b/c", "/ab", "/b"];
    for x in keys {
        for y in keys {
            assert_eq!(compare_paths(x, y), compare_paths(y, x).reverse(), "{x} vs {y}");
        }
    }
}

#[test]
fn test_btreemap_keeps_subtrees_contiguous() {
    let map: BTreeMap<PathKey, i32> = ["/a_b", "/a/b/c", "/b", "/a", "/a.b", "/a/b"]
        .into_iter()
        .map(|key| (PathKey::parse(key).unwrap(), 0))
        .collect();

    let keys: Vec<&str> = map.keys().map(PathKey::as_str).collect();
    assert_eq!(keys, vec!["/a", "/a/b", "/a/b/c", "/a.b", "/a_b", "/b"]);
}

#[test]
fn test_parse_accepts_full_keys() {
    for key in ["", "/a", "/a/b", "/a.b/c_d"] {
        assert_eq!(PathKey::parse(key).unwrap().as_str(), key);
    }
}

#[test]
fn test_parse_rejects_non_canonical_keys() {
    for key in ["a", "/", "/a/", "/a//b", "/a/./b", "/a/../b", "/.."] {
        let err = PathKey::parse(key).unwrap_err();
        assert!(err.is_malformed_key(), "{key}");
        assert!(!err.is_internal(), "{key}");
        assert_eq!(err.location(), key);
    }
    assert!(PathKey::try_from("a/b").is_err());
}
