use axum::{response::Html, routing::get, Router};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Front page with the verse form
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router {
    Router::new().route("/", get(index_handler))
}
