use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{ header, StatusCode },
    response::{ Html, IntoResponse },
    routing::{ get, post },
    Json,
    Router,
};
use log::{ error, info };
use tower_http::cors::{ Any, CorsLayer };

use crate::models::{ ChatRequest, ChatResponse, ErrorResponse };
use crate::relay::{ ChatRelay, RelayError };

const INDEX_HTML: &str = include_str!("../../static/index.html");
const LOADER_GIF: &[u8] = include_bytes!("../../static/loader.gif");

const INVALID_REQUEST_MESSAGE: &str = "Invalid request body. userInput cannot be empty.";

#[derive(Clone)]
struct AppState {
    relay: Arc<ChatRelay>,
}

pub fn router(relay: Arc<ChatRelay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/loader.gif", get(loader_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(AppState { relay })
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn loader_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/gif")], LOADER_GIF)
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Malformed JSON and non-string userInput both land here; they get the
    // same fixed 400 as a missing or blank field.
    let user_input = match payload {
        Ok(Json(ChatRequest { user_input: Some(input) })) => input,
        Ok(Json(ChatRequest { user_input: None })) | Err(_) => {
            return invalid_request_response();
        }
    };

    info!("incoming /chat request: {}", user_input);

    match state.relay.handle_chat(&user_input).await {
        Ok(fragment) =>
            (StatusCode::OK, Json(ChatResponse { response: fragment })).into_response(),
        Err(RelayError::InvalidRequest) => invalid_request_response(),
        Err(RelayError::Generation(cause)) => {
            // Recorded for operator visibility only; the caller sees a
            // generic message.
            error!("chat generation failed: {}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Internal Server Error".to_string() }),
            ).into_response()
        }
    }
}

fn invalid_request_response() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: INVALID_REQUEST_MESSAGE.to_string() }),
    ).into_response()
}
