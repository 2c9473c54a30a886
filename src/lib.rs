//! Pagemap: Filesystem-Derived Page Routing
//!
//! Derives, from a directory of source files, a routing table mapping
//! URL-like paths to the files that implement them, optionally arranged
//! as a route tree honoring the `index` file convention.

pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod scan;
pub mod types;
