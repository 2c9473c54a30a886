//! Core types for the page routing table.

use std::collections::HashMap;

/// RoutePath: canonical, slash-separated URL-like path identifying where a
/// page is served. Always begins with `/`; the root route is exactly `/`.
pub type RoutePath = String;

/// PageMap: route path -> root-relative file path (posix separators,
/// leading `/`, extension retained)
pub type PageMap = HashMap<RoutePath, String>;
