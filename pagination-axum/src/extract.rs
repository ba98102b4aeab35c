use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use pagination::{PageRequest, PaginationError, Paginator};
use serde::Serialize;
use tracing::{debug, error};

/// Used when a request carries no `Host` header to build page links from.
const DEFAULT_HOST: &str = "localhost";

/// Extracts everything a [`Paginator`] needs from a request.
///
/// The strategy itself is read from the request extensions, so the route must
/// be wrapped in an `Extension` layer carrying a `P`. Registering the route
/// through [`PagedRouter::paged_get`](crate::PagedRouter::paged_get) sets
/// that up.
pub struct Paged<P: Paginator> {
    strategy: P,
    input: P::Input,
    request: PageRequest,
}

impl<P: Paginator> Paged<P> {
    /// Slices `items` with the route's strategy and serializes the result
    /// into a JSON response.
    pub fn paginate<T: Serialize>(self, items: Vec<T>) -> Result<Response, PageRejection> {
        let body = self.strategy.paginate(items, self.input, &self.request)?;
        Ok(Json(body).into_response())
    }

    /// The query parameters the strategy read from the request.
    pub fn input(&self) -> &P::Input {
        &self.input
    }

    /// The request URL the strategy builds page links from.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }
}

impl<S, P> FromRequestParts<S> for Paged<P>
where
    S: Send + Sync,
    P: Paginator,
{
    type Rejection = PageRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(strategy) = parts.extensions.get::<P>().cloned() else {
            return Err(PageRejection::MissingStrategy {
                type_name: std::any::type_name::<P>(),
            });
        };

        let Query(input) = Query::<P::Input>::try_from_uri(&parts.uri)?;

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_HOST);
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|paq| paq.as_str())
            .unwrap_or("/");
        let request = PageRequest::parse(&format!("http://{host}{path_and_query}"))?;
        debug!(url = %request.url(), "extracted pagination input");

        Ok(Self {
            strategy,
            input,
            request,
        })
    }
}

/// Why pagination input could not be pulled out of a request, or why the
/// strategy refused it.
#[derive(Debug, thiserror::Error)]
pub enum PageRejection {
    /// The route was registered without an `Extension` layer carrying its
    /// strategy, so there is nothing to paginate with.
    #[error("no `{type_name}` strategy is attached to this route")]
    MissingStrategy { type_name: &'static str },
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl IntoResponse for PageRejection {
    fn into_response(self) -> Response {
        match self {
            Self::MissingStrategy { .. } => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::Query(rejection) => rejection.into_response(),
            Self::Pagination(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
        }
    }
}
