use axum::handler::Handler;
use axum::routing::{MethodRouter, get};
use axum::{Extension, Router};
use pagination::Paginator;
use tracing::debug;
use utoipa::openapi::OpenApi;
use utoipa::openapi::path::Parameter;
use utoipa_axum::router::OpenApiRouter;

use crate::docs::{self, DocumentError};

/// A route registered through [`PagedRouter::paged_get`], along with the
/// query parameters its strategy documents.
#[derive(Clone)]
pub struct PagedRoute {
    pub path: String,
    pub parameters: Vec<Parameter>,
}

/// An [`OpenApiRouter`] that keeps track of which routes paginate.
///
/// Handlers document themselves with `#[utoipa::path]` as usual. The query
/// parameters of each route's strategy are appended to that documentation
/// when the router is split into its parts, after anything the handler
/// declared itself.
pub struct PagedRouter<S = ()> {
    router: OpenApiRouter<S>,
    paged: Vec<PagedRoute>,
}

impl<S> PagedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::from_router(OpenApiRouter::new())
    }

    pub fn with_openapi(api: OpenApi) -> Self {
        Self::from_router(OpenApiRouter::with_openapi(api))
    }

    pub fn from_router(router: OpenApiRouter<S>) -> Self {
        Self {
            router,
            paged: Vec::new(),
        }
    }

    /// Registers a GET `handler` that paginates with `strategy`.
    ///
    /// The strategy is attached to the route as an extension so that a
    /// [`Paged`](crate::Paged) extractor in the handler can find it.
    pub fn paged_get<P, H, T>(mut self, path: &str, strategy: P, handler: H) -> Self
    where
        P: Paginator,
        H: Handler<T, S>,
        T: 'static,
    {
        self.paged.push(PagedRoute {
            path: path.to_owned(),
            parameters: strategy.parameters(),
        });
        self.router = self
            .router
            .route(path, get(handler).layer(Extension(strategy)));
        self
    }

    /// Registers a route that does not paginate.
    pub fn route(mut self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.router = self.router.route(path, method_router);
        self
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.paged.extend(other.paged);
        self.router = self.router.merge(other.router);
        self
    }

    /// The paged routes registered so far, in registration order.
    pub fn paged_routes(&self) -> &[PagedRoute] {
        &self.paged
    }

    pub fn with_state<S2>(self, state: S) -> PagedRouter<S2> {
        PagedRouter {
            router: self.router.with_state(state),
            paged: self.paged,
        }
    }

    /// Splits into the underlying [`Router`] and the finished document, with
    /// every paged route's parameters attached to its GET operation.
    pub fn split_for_parts(self) -> Result<(Router<S>, OpenApi), DocumentError> {
        for route in &self.paged {
            debug!(
                "documenting paged route - GET {} ({} pagination parameters)",
                route.path,
                route.parameters.len()
            );
        }

        let (router, api) = self.router.split_for_parts();
        let api = docs::attach_parameters(api, &self.paged)?;
        Ok((router, api))
    }
}

impl<S> Default for PagedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
