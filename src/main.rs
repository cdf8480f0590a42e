use axum::{
    routing::{get, post},
    Router,
};
use bara_backend::{
    config::{get_config, init_config},
    middleware, routes,
    store::{seed::seed_demo_data, ListingStore},
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = ListingStore::new();
    seed_demo_data(&store)?;

    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/:id", get(routes::jobs::get_job))
        .route("/api/courses", get(routes::courses::list_courses))
        .route(
            "/api/recommendations",
            post(routes::recommendations::get_recommendations),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let auth_api = Router::new()
        .route(
            "/api/auth/signup/candidate",
            post(routes::account::signup_candidate),
        )
        .route(
            "/api/auth/signup/employer",
            post(routes::account::signup_employer),
        )
        .route("/api/auth/login", post(routes::account::login))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.account_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let profile_api = Router::new()
        .route(
            "/api/me",
            get(routes::account::me).patch(routes::account::update_me),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    let candidate_api = Router::new()
        .route(
            "/api/jobs/:id/apply",
            post(routes::applications::apply_for_job),
        )
        .route(
            "/api/courses/register",
            post(routes::applications::register_for_course),
        )
        .route(
            "/api/me/applications",
            get(routes::applications::my_applications),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_candidate,
        ));

    let employer_api = Router::new()
        .route(
            "/api/employer/jobs",
            get(routes::jobs::my_jobs).post(routes::jobs::publish_job),
        )
        .route(
            "/api/employer/applications",
            get(routes::applications::employer_applications),
        )
        .route(
            "/api/employer/stats",
            get(routes::applications::employer_stats),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_employer,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(auth_api)
        .merge(profile_api)
        .merge(candidate_api)
        .merge(employer_api)
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
