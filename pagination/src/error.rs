/// Why a strategy could not page a request.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The requested page size is at or over the strategy's cap.
    #[error("page_size {requested} must be below {max}")]
    PageSizeTooLarge { requested: u64, max: u64 },
    /// The request URL could not be parsed, so page links cannot be built.
    #[error("request url `{url}` could not be parsed")]
    InvalidRequestUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
