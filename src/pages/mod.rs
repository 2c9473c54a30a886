//! Page routing pipeline: list, filter, derive, assemble, optionally nest.
//!
//! Control flows strictly downstream; each call rebuilds fresh structures
//! from a single directory snapshot.

pub mod filter;
pub mod map;
pub mod route;
pub mod tree;

use crate::config::PageMapConfig;
use crate::error::PageMapError;
use crate::scan::DirectoryLister;
use crate::types::PageMap;
use self::tree::NestOutcome;
use tracing::debug;

/// Output shape selected by `PageMapConfig::nested`.
#[derive(Debug)]
pub enum PageOutput {
    Flat(PageMap),
    Nested(NestOutcome),
}

/// Build the flat route table for the configured page directory.
pub fn page_map(
    config: &PageMapConfig,
    lister: &dyn DirectoryLister,
) -> Result<PageMap, PageMapError> {
    let entries = lister.list(&config.dir)?;
    debug!(
        dir = %config.dir.display(),
        entries = entries.len(),
        "scanned page directory"
    );
    map::build_page_map(
        &config.dir,
        &entries,
        &config.page_extensions,
        config.collisions,
    )
}

/// Build the nested route tree for the configured page directory.
pub fn page_tree(
    config: &PageMapConfig,
    lister: &dyn DirectoryLister,
) -> Result<NestOutcome, PageMapError> {
    let pages = page_map(config, lister)?;
    Ok(tree::nest_pages(&pages))
}

/// Entry point honoring the `nested` flag.
pub fn build(
    config: &PageMapConfig,
    lister: &dyn DirectoryLister,
) -> Result<PageOutput, PageMapError> {
    if config.nested {
        Ok(PageOutput::Nested(page_tree(config, lister)?))
    } else {
        Ok(PageOutput::Flat(page_map(config, lister)?))
    }
}
