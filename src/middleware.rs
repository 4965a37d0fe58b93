use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use futures_util::stream;
use std::time::Instant;

/// What the wrapped handler produced, captured for the request log.
///
/// Owned by a single request's task and dropped once the log record is
/// emitted; never shared across requests. A handler that sets no status
/// leaves the 0 sentinel in place.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    status: u16,
    size: usize,
}

impl ResponseMetadata {
    pub fn new() -> Self {
        Self { status: 0, size: 0 }
    }

    pub fn record_status(&mut self, status: u16) {
        self.status = status;
    }

    pub fn record_write(&mut self, bytes: usize) {
        self.size += bytes;
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Wraps every route so each invocation emits exactly one structured
/// record with the listening port, request target, method, status,
/// duration, and response size. Handlers stay unaware of logging.
pub async fn log_request(
    State(port): State<u16>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut metadata = ResponseMetadata::new();
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    metadata.record_status(parts.status.as_u16());
    // The handler has finished; draining its body here counts exactly the
    // bytes that will reach the transport, before transmission starts.
    let response = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            metadata.record_write(bytes.len());
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(error) => {
            // Hand the failure back to the transport untouched.
            let failed =
                Body::from_stream(stream::once(
                    async move { Err::<Bytes, _>(error) },
                ));
            Response::from_parts(parts, failed)
        }
    };

    let duration = start.elapsed();
    tracing::info!(
        port = port,
        uri = %uri,
        method = %method,
        status = metadata.status(),
        duration = ?duration,
        size = metadata.size(),
        "request completed"
    );
    response
}
