//! Route tree nesting.
//!
//! Converts a flat page map into a parent/child route tree with
//! deterministic sibling ordering. Structural inconsistency (missing root,
//! orphaned routes) never fails the call; it is reported as diagnostics on
//! the outcome and mirrored on the warning log channel.

use crate::pages::route;
use crate::types::{PageMap, RoutePath};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// A page-backed node in the route tree. Children are ordered ascending
/// lexicographic by path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageNode {
    pub path: RoutePath,
    pub file: String,
    pub is_index: bool,
    pub parent: RoutePath,
    pub children: Vec<RouteNode>,
}

/// Placeholder root synthesized when no page maps to `/`. Carries no
/// backing file and no index flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticNode {
    pub path: RoutePath,
    pub parent: Option<RoutePath>,
    pub children: Vec<RouteNode>,
}

/// A node in the route tree: either backed by a page file or synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteNode {
    Page(PageNode),
    Synthetic(SyntheticNode),
}

impl RouteNode {
    pub fn path(&self) -> &str {
        match self {
            RouteNode::Page(node) => &node.path,
            RouteNode::Synthetic(node) => &node.path,
        }
    }

    pub fn children(&self) -> &[RouteNode] {
        match self {
            RouteNode::Page(node) => &node.children,
            RouteNode::Synthetic(node) => &node.children,
        }
    }
}

/// Structural issue discovered while nesting. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Diagnostic {
    /// No page maps to `/`; a placeholder root was synthesized.
    MissingRoot,
    /// Routes whose parent has no page entry, excluded from the tree.
    Orphans(Vec<RoutePath>),
}

/// Tree-build outcome: a best-effort tree plus structural diagnostics.
/// The tree may be missing pages that exist in the page map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestOutcome {
    pub root: RouteNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Nest a completed page map into a single-rooted route tree.
///
/// Entries attach to the node at their derived parent path. A missing root
/// page yields a synthesized placeholder root with nothing attached to it;
/// entries whose parent has no page are collected as orphans.
pub fn nest_pages(pages: &PageMap) -> NestOutcome {
    let mut nodes: HashMap<RoutePath, PageNode> = pages
        .iter()
        .map(|(path, file)| {
            let node = PageNode {
                path: path.clone(),
                file: file.clone(),
                is_index: route::is_index_file(file),
                parent: route::parent_path(path),
                children: Vec::new(),
            };
            (path.clone(), node)
        })
        .collect();

    let mut diagnostics = Vec::new();
    if !nodes.contains_key("/") {
        warn!("no root page found");
        diagnostics.push(Diagnostic::MissingRoot);
    }

    let mut queue: Vec<RoutePath> = nodes
        .keys()
        .filter(|path| path.as_str() != "/")
        .cloned()
        .collect();
    queue.sort();

    // Descending traversal: every node's children are already attached by
    // the time the node itself moves under its parent, and inserting at the
    // front keeps siblings in ascending path order.
    let mut orphans = Vec::new();
    for path in queue.iter().rev() {
        let Some(node) = nodes.remove(path) else {
            continue;
        };
        match nodes.get_mut(&node.parent) {
            Some(parent) => parent.children.insert(0, RouteNode::Page(node)),
            None => orphans.push(node.path),
        }
    }

    if !orphans.is_empty() {
        orphans.sort();
        warn!(orphans = ?orphans, "orphan routes excluded from tree");
        diagnostics.push(Diagnostic::Orphans(orphans));
    }

    let root = match nodes.remove("/") {
        Some(node) => RouteNode::Page(node),
        None => RouteNode::Synthetic(SyntheticNode {
            path: "/".to_string(),
            parent: None,
            children: Vec::new(),
        }),
    };

    NestOutcome { root, diagnostics }
}
