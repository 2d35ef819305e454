use axum::{
    routing::{get, post},
    Router,
};
use quiz_backend::{
    config::{get_config, init_config},
    middleware::cors::cors_layer,
    routes,
    store::QuestionStore,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let store = match &config.questions_file {
        Some(path) => QuestionStore::from_file(path)?,
        None => QuestionStore::seeded(),
    };
    info!("Serving {} questions", store.len());

    let app_state = AppState::new(store);

    let question_routes = Router::new()
        .route("/questions/find", get(routes::questions::find_question))
        .route("/questions/random", get(routes::questions::random_question))
        .route("/questions/all", get(routes::questions::all_questions));

    let response_routes = Router::new()
        .route("/responses/verify", post(routes::responses::verify_response))
        .route(
            "/responses/performance",
            post(routes::responses::performance_report),
        );

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api-docs/openapi.json", get(routes::docs::openapi))
        .merge(question_routes)
        .merge(response_routes)
        .with_state(app_state)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
