use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request audit log.
///
/// One `api_request` event per call with method, path, status and, on
/// `/pathways/{key}` routes, the pathway key. Bodies are never logged; they
/// carry patient answers.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    match pathway_key(&path) {
        Some(key) if status.is_client_error() => tracing::warn!(
            method = %method,
            path = %path,
            pathway = key,
            status = status.as_u16(),
            "api_request"
        ),
        Some(key) => tracing::info!(
            method = %method,
            path = %path,
            pathway = key,
            status = status.as_u16(),
            "api_request"
        ),
        None => tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "api_request"
        ),
    }

    response
}

/// The `{key}` segment of a `/pathways/{key}...` path.
pub fn pathway_key(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/pathways/")?;
    let key = rest.split('/').next()?;
    (!key.is_empty() && key != "resolve").then_some(key)
}
