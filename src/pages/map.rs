//! Flat route table assembly.
//!
//! Reduces the filtered file set into the route-path -> file-path table.
//! Entries are consumed in lister order, so the colliding-route outcome
//! under the default policy is order-dependent.

use crate::error::PageMapError;
use crate::pages::{filter, route};
use crate::scan::FileEntry;
use crate::types::PageMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use tracing::debug;

/// Merge policy applied when two distinct files derive the same route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later-processed file silently overwrites the earlier one.
    #[default]
    LastWriteWins,
    /// Fail the whole call on the first colliding route.
    FailFast,
}

/// Build the route-path -> file-path table from a listed snapshot.
pub fn build_page_map(
    root: &Path,
    entries: &[FileEntry],
    extensions: &[String],
    policy: CollisionPolicy,
) -> Result<PageMap, PageMapError> {
    let mut pages = PageMap::new();
    for entry in entries {
        if !filter::is_page(entry, extensions) {
            continue;
        }
        let relative = relative_page_path(root, &entry.path);
        let route = route::route_path(&relative);
        if policy == CollisionPolicy::FailFast {
            if let Some(existing) = pages.get(&route) {
                return Err(PageMapError::RouteCollision {
                    route,
                    existing: existing.clone(),
                    incoming: relative,
                });
            }
        }
        pages.insert(route, relative);
    }
    debug!(pages = pages.len(), "built page map");
    Ok(pages)
}

/// Root-relative page path: posix-separated, leading `/`, extension retained.
fn relative_page_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            out.push('/');
            out.push_str(&name.to_string_lossy());
        }
    }
    out
}
