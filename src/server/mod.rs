mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::API;
use crate::server::handlers::places;

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    // unsupported methods on known paths answer like unknown routes
    Router::new()
        .route(
            "/api/places",
            post(places::create).fallback(handlers::not_found),
        )
        .route(
            "/api/places/user/:uid",
            get(places::find_by_user).fallback(handlers::not_found),
        )
        .route(
            "/api/places/:pid",
            get(places::find)
                .patch(places::update)
                .delete(places::delete)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(Extension(api))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

pub async fn serve<T: API + Sync + Send + 'static>(
    api: T,
    addr: SocketAddr,
) -> Result<(), hyper::Error> {
    let app = router(api);

    let server = axum::Server::try_bind(&addr)?;

    tracing::info!("listening on {}", addr);

    server.serve(app.into_make_service()).await
}
