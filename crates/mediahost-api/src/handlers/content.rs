//! Tenant-aware file delivery under `/content`.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{
    ACCEPT_RANGES, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE,
    LAST_MODIFIED, RANGE,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use mediahost_service::content::{ContentFile, ContentPolicy};
use mediahost_service::{ContentOutcome, ContentRequest};

use crate::error::ApiErrorResponse;
use crate::extractors::bearer_token;
use crate::state::AppState;

/// GET|HEAD|OPTIONS /content/{*path}
pub async fn serve_content(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    let path = format!("/{}", path.trim_start_matches('/'));
    let policy = ContentPolicy::for_path(&path);
    let mut response_headers = delivery_headers(&policy);

    if method == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, response_headers).into_response();
    }

    let request = ContentRequest {
        path,
        bearer: bearer_token(&headers).map(str::to_string),
        range: headers
            .get(RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        head_only: method == Method::HEAD,
    };

    match state.content_service.deliver(request).await {
        ContentOutcome::Found(file) => file_response(file, &policy, response_headers),
        ContentOutcome::RangeNotSatisfiable { size } => {
            insert(&mut response_headers, CONTENT_RANGE, &format!("bytes */{size}"));
            (StatusCode::RANGE_NOT_SATISFIABLE, response_headers).into_response()
        }
        ContentOutcome::NotFound => error_response(
            StatusCode::NOT_FOUND,
            "File not found",
            response_headers,
        ),
        ContentOutcome::ServerError => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            response_headers,
        ),
    }
}

/// Headers sent on every content response, found or not.
fn delivery_headers(policy: &ContentPolicy) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, HEAD, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Range, Authorization"),
    );
    headers.insert(ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    if let Some(cache_control) = policy.cache_control {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache_control));
    }
    headers
}

fn file_response(file: ContentFile, policy: &ContentPolicy, mut headers: HeaderMap) -> Response {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(policy.content_type));
    insert(&mut headers, CONTENT_LENGTH, &file.content_length().to_string());
    if let Some(modified) = file.last_modified {
        insert(
            &mut headers,
            LAST_MODIFIED,
            &modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        );
    }

    let status = match file.range {
        Some(range) => {
            insert(&mut headers, CONTENT_RANGE, &range.content_range(file.size));
            StatusCode::PARTIAL_CONTENT
        }
        None => StatusCode::OK,
    };

    let body = match file.body {
        Some(stream) => Body::from_stream(stream),
        None => Body::empty(),
    };

    (status, headers, body).into_response()
}

fn error_response(status: StatusCode, message: &str, headers: HeaderMap) -> Response {
    let body = ApiErrorResponse {
        error: message.to_string(),
        details: None,
    };
    (status, headers, Json(body)).into_response()
}

fn insert(headers: &mut HeaderMap, name: axum::http::HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
