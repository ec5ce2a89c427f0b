//! File resolution and directory listing.
//!
//! Maps request targets onto the served root: a target resolves to file
//! content, a directory's `index.html`, a generated listing page, or
//! not-found. `resolver` makes that decision; `listing` renders the
//! generated index page.

pub mod listing;
pub mod resolver;
