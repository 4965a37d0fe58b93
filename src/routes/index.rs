use axum::http::StatusCode;

#[tracing::instrument(name = "Index")]
pub async fn index() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Server is up.\n")
}
