use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::openapi::path::Parameter;

use crate::error::PaginationError;
use crate::params::IntegerParam;
use crate::request::PageRequest;
use crate::{Paginator, window};

/// Offset pagination with a client-controlled window.
///
/// The response body is the bare slice `items[offset..offset + limit]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffset {
    default_limit: u64,
}

impl LimitOffset {
    pub const DEFAULT_LIMIT: u64 = 100;

    /// `default_limit` applies when the request does not send `limit`.
    pub fn new(default_limit: u64) -> Self {
        Self { default_limit }
    }
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

/// Query parameters read by [`LimitOffset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitOffsetQuery {
    /// Max number of items to return.
    pub limit: Option<NonZeroU64>,
    /// Number of items to drop from the front of the collection.
    #[serde(default)]
    pub offset: u64,
}

impl Paginator for LimitOffset {
    type Input = LimitOffsetQuery;
    type Output<T: Serialize> = Vec<T>;

    fn paginate<T: Serialize>(
        &self,
        items: Vec<T>,
        input: LimitOffsetQuery,
        _request: &PageRequest,
    ) -> Result<Vec<T>, PaginationError> {
        let limit = input.limit.map(NonZeroU64::get).unwrap_or(self.default_limit);
        debug!(limit, offset = input.offset, total = items.len(), "slicing by limit and offset");
        Ok(window(items, input.offset, limit))
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            IntegerParam::new("limit")
                .description("Max number of items to return")
                .default_value(self.default_limit)
                .exclusive_minimum(0)
                .build(),
            IntegerParam::new("offset")
                .description("Number of items to skip from the start of the collection")
                .default_value(0)
                .minimum(0)
                .build(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request() -> PageRequest {
        PageRequest::parse("http://testlocation/listings").expect("test url parses")
    }

    fn query(limit: Option<u64>, offset: u64) -> LimitOffsetQuery {
        LimitOffsetQuery {
            limit: limit.map(|v| NonZeroU64::new(v).expect("test limit is non-zero")),
            offset,
        }
    }

    #[rstest]
    #[case(Some(10), 0, 0..10)]
    #[case(Some(10), 5, 5..15)]
    #[case(None, 0, 0..100)]
    #[case(Some(10), 95, 95..100)]
    #[case(Some(10), 100, 0..0)]
    fn slices_the_requested_window(
        #[case] limit: Option<u64>,
        #[case] offset: u64,
        #[case] expected: std::ops::Range<u64>,
    ) {
        let items: Vec<u64> = (0..100).collect();

        let page = LimitOffset::default()
            .paginate(items, query(limit, offset), &request())
            .expect("limit offset never fails");

        assert_eq!(expected.collect::<Vec<u64>>(), page);
    }

    #[test]
    fn configured_default_limit_applies_when_absent() {
        let items: Vec<u64> = (0..100).collect();

        let page = LimitOffset::new(25)
            .paginate(items, query(None, 0), &request())
            .expect("limit offset never fails");

        assert_eq!((0..25).collect::<Vec<u64>>(), page);
    }

    #[test]
    fn documents_limit_and_offset_with_the_configured_default() {
        let parameters = LimitOffset::new(25).parameters();
        assert_eq!(2, parameters.len());

        let limit = serde_json::to_value(&parameters[0]).expect("parameter serializes");
        assert_eq!(Some("limit"), limit["name"].as_str());
        assert_eq!(Some(25.0), limit["schema"]["default"].as_f64());
        assert_eq!(Some(0.0), limit["schema"]["exclusiveMinimum"].as_f64());

        let offset = serde_json::to_value(&parameters[1]).expect("parameter serializes");
        assert_eq!(Some("offset"), offset["name"].as_str());
        assert_eq!(Some(0.0), offset["schema"]["default"].as_f64());
        assert_eq!(Some(0.0), offset["schema"]["minimum"].as_f64());
    }
}
