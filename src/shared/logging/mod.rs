use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cafe_api=info,tower_http=info";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}
