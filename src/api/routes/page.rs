use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;

use crate::api::state::AppState;
use crate::layout::Node;

const APP_JS: &str = include_str!("../../../static/app.js");

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

pub async fn layout(State(state): State<AppState>) -> Json<Node> {
    Json(state.layout.as_ref().clone())
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}
