use askllm_app::AppContext;
use askllm_errors::AppError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::compression::CompressionLayer;

#[derive(Deserialize)]
struct AskParams {
    q: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = AppContext::from_env();
    let app = router(app_context);

    let addr = "0.0.0.0:8080";
    tracing::info!("AskLLM (DeepSeek) server started on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(handle_ask))
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn handle_ask(State(ctx): State<AppContext>, Query(params): Query<AskParams>) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return AppError::MissingQuery.into_response(),
    };

    match ctx.answer_query.execute(query).await {
        Ok(answer) => (StatusCode::OK, answer.text).into_response(),
        Err(e) => {
            tracing::error!("Failed to answer query: {}", e);
            e.into_response()
        }
    }
}
