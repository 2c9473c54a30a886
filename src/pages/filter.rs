//! Page candidate filtering.

use crate::scan::FileEntry;

/// Returns true iff the entry is a non-directory whose extension (text after
/// the final `.`, case-sensitive, no leading dot) is in `extensions` and
/// whose basename does not begin with `_`.
pub fn is_page(entry: &FileEntry, extensions: &[String]) -> bool {
    if entry.is_dir {
        return false;
    }
    let name = match entry.path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    if name.starts_with('_') {
        return false;
    }
    match entry.path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|allowed| allowed == ext),
        None => false,
    }
}
