use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::openapi::path::Parameter;

use crate::error::PaginationError;
use crate::params::IntegerParam;
use crate::request::PageRequest;
use crate::response::PaginatedResponse;
use crate::{Paginator, window};

const PAGE_PARAM: &str = "page";

fn page_parameter() -> Parameter {
    IntegerParam::new(PAGE_PARAM)
        .description("Page to return, counted from 1")
        .default_value(1)
        .exclusive_minimum(0)
        .build()
}

/// Fixed-size page pagination.
///
/// The response body is the bare slice for the requested page. Use
/// [`PageNumberExtra`] when clients need the total count and page links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumber {
    page_size: u64,
}

impl PageNumber {
    pub const DEFAULT_PAGE_SIZE: u64 = 100;

    pub fn new(page_size: u64) -> Self {
        Self { page_size }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Query parameters read by [`PageNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    /// Page to return. Pages count from 1.
    pub page: Option<NonZeroU64>,
}

impl PageQuery {
    fn page(self) -> u64 {
        self.page.map(NonZeroU64::get).unwrap_or(1)
    }
}

impl Paginator for PageNumber {
    type Input = PageQuery;
    type Output<T: Serialize> = Vec<T>;

    fn paginate<T: Serialize>(
        &self,
        items: Vec<T>,
        input: PageQuery,
        _request: &PageRequest,
    ) -> Result<Vec<T>, PaginationError> {
        let page = input.page();
        let start = (page - 1).saturating_mul(self.page_size);
        debug!(page, page_size = self.page_size, total = items.len(), "slicing by page number");
        Ok(window(items, start, self.page_size))
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![page_parameter()]
    }
}

/// Page pagination that wraps the slice in a [`PaginatedResponse`] envelope
/// carrying the total count and absolute links to the neighbouring pages.
///
/// Clients may override the page size up to (but not including)
/// `max_page_size`. Larger values are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberExtra {
    page_size: u64,
    max_page_size: u64,
}

impl PageNumberExtra {
    pub const DEFAULT_PAGE_SIZE: u64 = 100;
    pub const DEFAULT_MAX_PAGE_SIZE: u64 = 200;

    pub fn new(page_size: u64) -> Self {
        Self {
            page_size,
            max_page_size: Self::DEFAULT_MAX_PAGE_SIZE,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    fn page_size(&self, input: &PageSizeQuery) -> Result<u64, PaginationError> {
        let Some(requested) = input.page_size.map(NonZeroU64::get) else {
            return Ok(self.page_size);
        };
        if requested >= self.max_page_size {
            return Err(PaginationError::PageSizeTooLarge {
                requested,
                max: self.max_page_size,
            });
        }
        Ok(requested)
    }
}

impl Default for PageNumberExtra {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Query parameters read by [`PageNumberExtra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageSizeQuery {
    /// Page to return. Pages count from 1.
    pub page: Option<NonZeroU64>,
    /// Per-request page size override.
    pub page_size: Option<NonZeroU64>,
}

impl PageSizeQuery {
    fn page(self) -> u64 {
        self.page.map(NonZeroU64::get).unwrap_or(1)
    }
}

impl Paginator for PageNumberExtra {
    type Input = PageSizeQuery;
    type Output<T: Serialize> = PaginatedResponse<T>;

    fn paginate<T: Serialize>(
        &self,
        items: Vec<T>,
        input: PageSizeQuery,
        request: &PageRequest,
    ) -> Result<PaginatedResponse<T>, PaginationError> {
        let page = input.page();
        let page_size = self.page_size(&input)?;
        let count = items.len() as u64;
        let start = (page - 1).saturating_mul(page_size);
        debug!(page, page_size, total = count, "building page envelope");

        let next = (start.saturating_add(page_size) < count).then(|| {
            request
                .replace_query(PAGE_PARAM, Some(&page.saturating_add(1).to_string()))
                .to_string()
        });
        // The first page link carries no page parameter at all.
        let previous = (page > 1).then(|| {
            let target = page - 1;
            let value = (target > 1).then(|| target.to_string());
            request.replace_query(PAGE_PARAM, value.as_deref()).to_string()
        });

        Ok(PaginatedResponse {
            results: window(items, start, page_size),
            count,
            next,
            previous,
        })
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            page_parameter(),
            IntegerParam::new("page_size")
                .description("Number of items per page")
                .default_value(self.page_size)
                .exclusive_maximum(self.max_page_size)
                .build(),
        ]
    }
}
