use crate::configuration::Settings;
use crate::middleware::log_request;
use crate::routes;
use axum::middleware::from_fn_with_state;
use axum::{extract::Request, routing, serve::Serve, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

pub fn router(port: u16) -> Router {
    Router::new()
        .route("/", routing::get(routes::index))
        .route("/ping", routing::get(routes::ping))
        .layer(from_fn_with_state(port, log_request))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = Uuid::now_v7();
                info_span!("Http Request", %request_id, request_uri = %request.uri())
            },
        ))
}

pub fn run(listener: TcpListener, port: u16) -> Serve<Router, Router> {
    axum::serve(listener, router(port))
}

pub struct Application {
    port: u16,
    server: Serve<Router, Router>,
}

impl Application {
    pub async fn build(
        configuration: Settings,
    ) -> Result<Self, std::io::Error> {
        let listener =
            TcpListener::bind(configuration.application.address()).await?;
        let port = listener.local_addr()?.port();
        tracing::info!(port = port, "starting server");
        Ok(Self {
            port,
            server: run(listener, port),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
