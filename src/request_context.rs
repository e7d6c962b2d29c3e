//! Per-request id propagation.
//!
//! A task-local request id is scoped around every request so error responses
//! and response metadata can reference it without threading it through call
//! signatures.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::future::Future;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone, Debug)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

tokio::task_local! {
    static REQUEST_ID: RequestId;
}

/// Returns the request id of the current task scope, if any.
pub fn current_request_id() -> Option<RequestId> {
    REQUEST_ID.try_with(|rid| rid.clone()).ok()
}

/// Runs a future with the given request id in scope. Used by the middleware
/// below and by tests that assert on id propagation.
pub async fn scope_request_id<F>(id: RequestId, fut: F) -> F::Output
where
    F: Future,
{
    REQUEST_ID.scope(id, fut).await
}

/// Ensures every request carries a request id: an incoming `x-request-id`
/// header is honored, otherwise a fresh one is generated. The id is scoped
/// around the downstream handler and echoed back on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let rid = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("req-{}", Uuid::new_v4().simple()));

    let mut response = scope_request_id(RequestId::new(rid.clone()), next.run(request)).await;

    if let Ok(value) = HeaderValue::from_str(&rid) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
