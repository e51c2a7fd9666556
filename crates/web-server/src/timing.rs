use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs how long each request took. Installed only in debug mode.
pub async fn log_response_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::debug!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        "Response time: {:.3}s",
        started.elapsed().as_secs_f64()
    );
    response
}
