//! Loads a generator-emitted `menudata.js` and checks the resulting tree.

use navmenu_tree::{NavLiteral, NavTree, SourceFormat};
use pretty_assertions::assert_eq;

const MENUDATA: &str = include_str!("fixtures/menudata.js");

fn load() -> NavTree {
    NavTree::from_source(MENUDATA, SourceFormat::Auto).unwrap()
}

#[test]
fn test_fixture_structure() {
    let tree = load();

    assert_eq!(tree.len(), 169);
    assert_eq!(tree.max_depth(), Some(3));
    let top: Vec<_> = tree.roots().map(|node| node.text()).collect();
    assert_eq!(top, vec!["Main Page", "Data Structures", "Files"]);
}

#[test]
fn test_fixture_traversal_starts_in_display_order() {
    let tree = load();

    let head: Vec<_> = tree
        .traverse()
        .take(8)
        .map(|(node, depth)| (node.text(), depth))
        .collect();

    assert_eq!(
        head,
        vec![
            ("Main Page", 0),
            ("Data Structures", 0),
            ("Data Structures", 1),
            ("Data Structure Index", 1),
            ("Data Fields", 1),
            ("All", 2),
            ("_", 3),
            ("a", 3),
        ]
    );
}

#[test]
fn test_fixture_truncated_labels_kept_verbatim() {
    let tree = load();

    let labels: Vec<_> = tree
        .find_all_by_url("functions_c.html#index_c")
        .into_iter()
        .map(|node| node.text())
        .collect();

    assert_eq!(labels, vec!["c", "cleanu", "compre"]);
    assert!(tree.traverse().any(|(node, _)| node.text() == "mapper"));
    assert!(tree.traverse().any(|(node, _)| node.text() == "buffer"));
}

#[test]
fn test_fixture_duplicate_urls_first_match_vs_all() {
    let tree = load();

    let first = tree.find_by_url("functions.html").unwrap();
    let all = tree.find_all_by_url("functions.html");

    assert_eq!(first.text(), "Data Fields");
    assert_eq!(first.depth(), 1);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], first);
    assert_eq!(all[1].text(), "All");
    assert_eq!(all[1].parent(), Some(first));
}

#[test]
fn test_fixture_fragment_shared_across_groups() {
    let tree = load();

    let index_c: Vec<_> = tree
        .traverse()
        .filter(|(node, _)| node.fragment() == Some("index_c"))
        .map(|(node, _)| node.page())
        .collect();

    assert!(index_c.contains(&"functions_c.html"));
    assert!(index_c.contains(&"functions_vars_c.html"));
    assert!(index_c.contains(&"globals.html"));
}

#[test]
fn test_fixture_shared_url_count() {
    let tree = load();

    assert_eq!(tree.shared_urls().len(), 31);
}

#[test]
fn test_fixture_breadcrumbs() {
    let tree = load();

    let crumbs: Vec<_> = tree
        .breadcrumbs("globals_vars.html#index_m")
        .into_iter()
        .map(|node| node.text())
        .collect();

    assert_eq!(crumbs, vec!["Files", "Globals", "Variables"]);
}

#[test]
fn test_fixture_json_round_trip() {
    let tree = load();

    let json = tree.to_literal().to_json(true).unwrap();
    let rebuilt = NavTree::from_literal(NavLiteral::from_json(&json).unwrap()).unwrap();

    let before: Vec<_> = tree
        .traverse()
        .map(|(node, depth)| (node.text(), node.url(), depth))
        .collect();
    let after: Vec<_> = rebuilt
        .traverse()
        .map(|(node, depth)| (node.text(), node.url(), depth))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_fixture_every_url_is_findable() {
    let tree = load();

    for (node, _) in tree.traverse() {
        let found = tree.find_all_by_url(node.url());
        assert!(found.contains(&node), "{} not found by {}", node.text(), node.url());
    }
}
