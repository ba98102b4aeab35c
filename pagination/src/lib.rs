use serde::Serialize;
use serde::de::DeserializeOwned;
use utoipa::openapi::path::Parameter;

pub mod error;
mod limit_offset;
mod page_number;
pub mod params;
mod request;
mod response;

pub use error::PaginationError;
pub use limit_offset::{LimitOffset, LimitOffsetQuery};
pub use page_number::{PageNumber, PageNumberExtra, PageQuery, PageSizeQuery};
pub use request::PageRequest;
pub use response::PaginatedResponse;

/// How a listing route slices its backing collection.
///
/// A strategy is configured once, attached to a route, and then drives two
/// things for that route: slicing the collection for each request, and the
/// query parameters the route documents. `parameters` is an instance method
/// so configured values (a route-specific default page size, a cap) show up
/// in the documented schema.
pub trait Paginator: Clone + Send + Sync + 'static {
    /// Query parameters the strategy reads from the request.
    type Input: DeserializeOwned + Send + 'static;
    /// Body shape the strategy responds with.
    type Output<T: Serialize>: Serialize;

    /// Slice `items` down to the window described by `input`.
    fn paginate<T: Serialize>(
        &self,
        items: Vec<T>,
        input: Self::Input,
        request: &PageRequest,
    ) -> Result<Self::Output<T>, PaginationError>;

    /// Query parameter documentation for every route this strategy is
    /// applied to.
    fn parameters(&self) -> Vec<Parameter>;
}

/// `items[start..start + len]` by value, empty when `start` is past the end.
pub(crate) fn window<T>(items: Vec<T>, start: u64, len: u64) -> Vec<T> {
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    items.into_iter().skip(start).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::window;

    #[test]
    fn window_is_empty_past_the_end() {
        assert!(window(vec![1, 2, 3], 3, 10).is_empty());
        assert!(window(vec![1, 2, 3], u64::MAX, 10).is_empty());
    }

    #[test]
    fn window_truncates_at_the_end() {
        assert_eq!(vec![2, 3], window(vec![1, 2, 3], 1, 10));
    }
}
