#![recursion_limit = "4096"]
#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use kavvi_landing::app::*;
    use kavvi_landing::core::api::ApiClient;
    use kavvi_landing::core::attribution::Attribution;
    use kavvi_landing::core::config::Config;
    use kavvi_landing::core::server_transport::ReqwestTransport;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    tracing::info!(
        "Config loaded: backend={}, api_timeout_ms={}",
        config.has_backend(),
        config.api_timeout_ms
    );

    // Probe the backend once in the background; the page is served either way
    if config.has_backend() {
        let backend_url = config.backend_url.clone();
        let timeout_ms = config.api_timeout_ms;
        tokio::spawn(async move {
            let transport = match ReqwestTransport::new(timeout_ms) {
                Ok(transport) => transport,
                Err(e) => {
                    tracing::warn!("Backend probe skipped: {}", e);
                    return;
                }
            };
            let client = ApiClient::new(transport, &backend_url, Attribution::default());
            let health = client.health_check().await;

            if health.is_healthy() {
                tracing::info!("Backend {} is healthy", backend_url);
            } else {
                tracing::warn!("Backend {} reported status '{}'", backend_url, health.status);
            }
        });
    } else {
        tracing::warn!("BACKEND_URL is not set; forms will post to relative /api paths");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serves .br and .gz variants of the bundle when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        // Brotli first, gzip as fallback
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
