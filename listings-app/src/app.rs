use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::Router;
use axum::response::Response;
use error_stack::{Report, ResultExt};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Span, info};

/// Where the listings service binds.
pub struct AppProperties {
    pub host: IpAddr,
    pub port: u16,
}

impl AppProperties {
    /// Listen on every interface at `port`.
    pub fn on_port(port: u16) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("the listings service exited with an error")]
pub struct AppError;

pub type AppResult<T> = Result<T, Report<AppError>>;

/// Serve `routes` on the configured socket until the server stops, logging
/// every response with its latency.
pub async fn run(routes: Router, properties: AppProperties) -> AppResult<()> {
    let listener = bind(&properties).await?;

    let routes = routes.layer(ServiceBuilder::new().layer(
        TraceLayer::new_for_http().on_response(
            |res: &Response, latency: Duration, _span: &Span| {
                info!("returned {} in {}ms", res.status(), latency.as_millis());
            },
        ),
    ));

    info!(
        "serving listings on {}",
        listener.local_addr().change_context(AppError)?
    );

    axum::serve(listener, routes).await.change_context(AppError)
}

async fn bind(properties: &AppProperties) -> AppResult<TcpListener> {
    TcpListener::bind(SocketAddr::new(properties.host, properties.port))
        .await
        .change_context(AppError)
}
