//! Axum bindings for the `pagination` strategies.
//!
//! Routes are registered through a [`PagedRouter`], which attaches each
//! route's strategy as a request extension and records the query parameters
//! the strategy documents. Handlers take a [`Paged`] extractor and hand it
//! the items to slice.

mod docs;
mod extract;
mod router;

pub use docs::DocumentError;
pub use extract::{PageRejection, Paged};
pub use router::{PagedRoute, PagedRouter};
