use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов: длительность, статус, метод, путь.
///
/// Ответы 4xx/5xx пишутся с уровнем warn.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!("{:>5}ms | {} {:>6} {}", elapsed_ms, status.as_u16(), method, path);
    } else {
        tracing::info!("{:>5}ms | {} {:>6} {}", elapsed_ms, status.as_u16(), method, path);
    }

    response
}
