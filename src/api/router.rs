//! HTTP API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. Every route passes through the CORS
//! layer and the access logger.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::CorsOrigins;

/// Build the API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext, cors: &CorsOrigins) -> Router {
    let routes = Router::new()
        .route("/login", post(endpoints::auth::login))
        .route("/init-data", post(endpoints::data::init))
        .route("/clear-data", post(endpoints::data::clear))
        .route("/patients", get(endpoints::patients::list))
        .route("/search", get(endpoints::search::search))
        .route("/department/:name", get(endpoints::department::list))
        .route("/analytics/:patient_id", get(endpoints::analytics::patient))
        .route("/deep-query", post(endpoints::deep_query::ask))
        .with_state(ctx);

    Router::new()
        .route("/api", get(endpoints::system::root))
        .route("/api/", get(endpoints::system::root))
        .nest("/api", routes)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(cors_layer(cors))
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(values))
        }
    }
}
