//! Route path derivation from root-relative file paths.
//!
//! Index matching is exact-string and case-sensitive: a file named
//! `Index.js` is not an index file.

const INDEX_SUFFIX: &str = "/index";

/// Derive the canonical route for a root-relative file path (posix
/// separators, leading `/`, extension intact).
///
/// Strips from the final `.` in the path, then resolves the index
/// convention: `/index` is the root route, a trailing `/index` segment
/// collapses to the enclosing directory's route.
pub fn route_path(relative: &str) -> String {
    strip_index_suffix(strip_extension(relative)).to_string()
}

/// Parent route of `path`: drop the last `/`-delimited segment. A top-level
/// path parents to `/`.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// True iff the file's basename, stripped of extension, is exactly `index`.
pub fn is_index_file(relative: &str) -> bool {
    let base = strip_extension(relative);
    base == INDEX_SUFFIX || base.ends_with(INDEX_SUFFIX)
}

fn strip_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(dot) => &path[..dot],
        None => path,
    }
}

fn strip_index_suffix(path: &str) -> &str {
    if path == INDEX_SUFFIX {
        "/"
    } else if let Some(stripped) = path.strip_suffix(INDEX_SUFFIX) {
        stripped
    } else {
        path
    }
}
