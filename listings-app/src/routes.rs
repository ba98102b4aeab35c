use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use const_format::concatcp;
use pagination::{LimitOffset, PageNumberExtra, PaginatedResponse};
use pagination_axum::{DocumentError, Paged, PageRejection, PagedRouter};
use tracing::{info, instrument};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::listing::{self, Listing};
use crate::metrics;

const LISTING_ROOT_PATH: &str = "/listings";

const LISTING_BROWSE_PATH: &str = concatcp!(LISTING_ROOT_PATH, "/browse");
const LISTING_PAGES_PATH: &str = concatcp!(LISTING_ROOT_PATH, "/pages");

const DEFAULT_BROWSE_LIMIT: u64 = 25;
const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(OpenApi)]
#[openapi(paths(browse_listings, listing_pages))]
struct ApiDoc;

pub fn build(metrics_enabled: bool) -> Result<Router, DocumentError> {
    let (router, api) = PagedRouter::with_openapi(ApiDoc::openapi())
        .paged_get(
            LISTING_BROWSE_PATH,
            LimitOffset::new(DEFAULT_BROWSE_LIMIT),
            browse_listings,
        )
        .paged_get(
            LISTING_PAGES_PATH,
            PageNumberExtra::new(DEFAULT_PAGE_SIZE),
            listing_pages,
        )
        .split_for_parts()?;

    let router = if metrics_enabled {
        info!("metrics enabled, setting up metrics handler");
        let metrics_recorder = metrics::setup_recorder();
        router
            .route("/metrics", get(|| async move { metrics_recorder.render() }))
            .route_layer(middleware::from_fn(metrics::track_http))
    } else {
        info!("metrics not enabled, setting up service unavailable metrics handler");
        router.route("/metrics", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Metrics endpoint is disabled. Metrics must be enabled and the service restarted")}))
    };

    Ok(router.merge(
        SwaggerUi::new("/listings/swagger-ui").url("/listings/api-docs/openapi.json", api),
    ))
}

/// Browse the catalogue with a client controlled window.
#[utoipa::path(
    get,
    path = LISTING_BROWSE_PATH,
    responses(
        (status = OK, description = "A window of catalogue listings", body = Vec<Listing>),
    )
)]
#[instrument(skip(pages), err(Debug), fields(req.limit = ?pages.input().limit, req.offset = pages.input().offset))]
async fn browse_listings(pages: Paged<LimitOffset>) -> Result<Response, PageRejection> {
    metrics::increment_pages_served();
    pages.paginate(listing::catalogue())
}

/// Page through the catalogue, with the total count and links to the
/// neighbouring pages.
#[utoipa::path(
    get,
    path = LISTING_PAGES_PATH,
    responses(
        (status = OK, description = "A page of catalogue listings", body = PaginatedResponse<Listing>),
    )
)]
#[instrument(skip(pages), err(Debug), fields(req.url = %pages.request().url(), req.page = ?pages.input().page, req.page_size = ?pages.input().page_size))]
async fn listing_pages(pages: Paged<PageNumberExtra>) -> Result<Response, PageRejection> {
    metrics::increment_pages_served();
    pages.paginate(listing::catalogue())
}
