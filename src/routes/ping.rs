use axum::http::StatusCode;

#[tracing::instrument(name = "Ping")]
pub async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::OK, "pong\n")
}
