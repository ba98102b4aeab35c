use app::{AppError, AppProperties, AppResult};
use dotenv::dotenv;
use error_stack::ResultExt;
use error_stack::fmt::ColorMode;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod app;
mod listing;
mod metrics;
mod routes;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    match try_main().await {
        Ok(_) => info!("listings service shutting down"),
        Err(e) => {
            error!("listings service exited with error: {e:?}");
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("LISTINGS_LOG"))
        .init();
}

async fn try_main() -> AppResult<()> {
    init_logging();

    if let Err(e) = dotenv() {
        warn!("failed to load .env file: {e}");
    }

    let routes = routes::build(true).change_context(AppError)?;

    app::run(routes, AppProperties::on_port(read_port()?)).await
}

fn read_port() -> AppResult<u16> {
    let Ok(port) = std::env::var("LISTINGS_PORT") else {
        return Ok(DEFAULT_PORT);
    };

    port.parse()
        .change_context(AppError)
        .attach("LISTINGS_PORT must be a port number")
}
