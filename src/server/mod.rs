use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use crate::chat_core::{CompletionError, Config, Conversation, Responder};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Conversation,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub messages: Conversation,
}

pub struct ApiError(CompletionError);

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("chat request failed: {}", self.0);
        let body = Json(json!({ "detail": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn router(responder: Arc<Responder>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(|| async { "ok" }))
        .with_state(responder)
}

#[instrument(skip_all, fields(turns = request.messages.len()))]
async fn chat(
    State(responder): State<Arc<Responder>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let messages = responder.respond(request.messages).await?;
    Ok(Json(ChatResponse { messages }))
}

pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = config.listen_addr;
    let responder = Arc::new(Responder::from_config(&config));
    let app = router(responder);

    tracing::info!(model = %config.model, "listening on http://{addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
