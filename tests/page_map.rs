use std::fs;
use std::path::Path;

use pagemap::config::PageMapConfig;
use pagemap::error::PageMapError;
use pagemap::pages;
use pagemap::pages::map::CollisionPolicy;
use pagemap::pages::PageOutput;
use pagemap::scan::WalkdirLister;
use tempfile::TempDir;

fn write_pages(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }
}

fn config_for(dir: &Path) -> PageMapConfig {
    PageMapConfig {
        dir: dir.to_path_buf(),
        ..PageMapConfig::default()
    }
}

#[test]
fn maps_pages_with_default_extensions() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "foo/bar.jsx"]);

    let pages = pages::page_map(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages.get("/"), Some(&"/index.js".to_string()));
    assert_eq!(pages.get("/foo/bar"), Some(&"/foo/bar.jsx".to_string()));
}

#[test]
fn nested_index_files_map_to_directory_routes() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "foo/index.js", "foo/bar.jsx"]);

    let pages = pages::page_map(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    assert_eq!(pages.get("/"), Some(&"/index.js".to_string()));
    assert_eq!(pages.get("/foo"), Some(&"/foo/index.js".to_string()));
    assert_eq!(pages.get("/foo/bar"), Some(&"/foo/bar.jsx".to_string()));
}

#[test]
fn underscore_prefixed_files_never_appear() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "_draft.js", "foo/_private.jsx"]);

    let pages = pages::page_map(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages.values().all(|file| !file.contains("_draft")));
}

#[test]
fn extension_set_filters_exactly() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "foo/index.js", "foo/bar.jsx"]);

    let config = PageMapConfig {
        page_extensions: vec!["jsx".to_string()],
        ..config_for(temp.path())
    };
    let pages = pages::page_map(&config, &WalkdirLister::new()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages.get("/foo/bar"), Some(&"/foo/bar.jsx".to_string()));
}

#[test]
fn empty_extension_set_yields_empty_map() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "foo/bar.jsx"]);

    let config = PageMapConfig {
        page_extensions: Vec::new(),
        ..config_for(temp.path())
    };
    let pages = pages::page_map(&config, &WalkdirLister::new()).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn every_route_starts_with_slash() {
    let temp = TempDir::new().unwrap();
    write_pages(
        temp.path(),
        &["index.js", "a.js", "b/index.js", "b/c/d.jsx"],
    );

    let pages = pages::page_map(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    for route in pages.keys() {
        assert!(route.starts_with('/'), "route {:?} missing leading slash", route);
    }
}

#[test]
fn missing_scan_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp.path().join("no-such-dir"));
    let result = pages::page_map(&config, &WalkdirLister::new());
    assert!(matches!(result, Err(PageMapError::Scan(_))));
}

#[test]
fn repeated_calls_on_unchanged_snapshot_are_identical() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js", "foo/index.js", "foo/bar.jsx"]);

    let config = config_for(temp.path());
    let first = pages::page_map(&config, &WalkdirLister::new()).unwrap();
    let second = pages::page_map(&config, &WalkdirLister::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn colliding_routes_overwrite_by_default() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["foo.js", "foo/index.js"]);

    let pages = pages::page_map(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    // Both files derive /foo; the winner depends on lister order.
    assert_eq!(pages.len(), 1);
    assert!(pages.contains_key("/foo"));
}

#[test]
fn fail_fast_policy_rejects_colliding_routes() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["foo.js", "foo/index.js"]);

    let config = PageMapConfig {
        collisions: CollisionPolicy::FailFast,
        ..config_for(temp.path())
    };
    let result = pages::page_map(&config, &WalkdirLister::new());
    match result {
        Err(PageMapError::RouteCollision { route, .. }) => assert_eq!(route, "/foo"),
        other => panic!("expected collision error, got {:?}", other),
    }
}

#[test]
fn build_selects_output_shape_from_config() {
    let temp = TempDir::new().unwrap();
    write_pages(temp.path(), &["index.js"]);

    let flat = pages::build(&config_for(temp.path()), &WalkdirLister::new()).unwrap();
    assert!(matches!(flat, PageOutput::Flat(_)));

    let config = PageMapConfig {
        nested: true,
        ..config_for(temp.path())
    };
    let nested = pages::build(&config, &WalkdirLister::new()).unwrap();
    match nested {
        PageOutput::Nested(outcome) => assert_eq!(outcome.root.path(), "/"),
        other => panic!("expected nested output, got {:?}", other),
    }
}

mod properties {
    use pagemap::pages::map::{build_page_map, CollisionPolicy};
    use pagemap::scan::FileEntry;
    use proptest::prelude::*;
    use std::path::PathBuf;

    proptest! {
        #[test]
        fn routes_are_rooted_and_have_no_trailing_slash(
            files in prop::collection::vec(
                (prop::collection::vec("[a-z]{1,6}", 1..4), "(js|jsx)"),
                0..16,
            )
        ) {
            let root = PathBuf::from("/pages");
            let entries: Vec<FileEntry> = files
                .iter()
                .map(|(segments, ext)| {
                    let mut path = root.clone();
                    for segment in segments {
                        path.push(segment);
                    }
                    path.set_extension(ext);
                    FileEntry { path, is_dir: false }
                })
                .collect();

            let extensions = vec!["js".to_string(), "jsx".to_string()];
            let pages = build_page_map(
                &root,
                &entries,
                &extensions,
                CollisionPolicy::LastWriteWins,
            )
            .unwrap();

            for route in pages.keys() {
                prop_assert!(route.starts_with('/'));
                prop_assert!(route == "/" || !route.ends_with('/'));
            }
        }
    }
}
