use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::config;

/// Security middleware applied to every response.
///
/// Adds the fixed security header set and the CORS allow-all origin. When
/// `force_https` is enabled, plaintext requests are redirected to their https
/// equivalent before reaching a handler and responses carry HSTS.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let force_https = config::config().security.force_https;

    if force_https {
        if let Some(target) = https_redirect_target(request.headers(), request.uri()) {
            return Redirect::temporary(&target).into_response();
        }
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; object-src 'none'"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    if force_https {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}

/// Compute the https redirect target for a plaintext request, or None when
/// the request is already secure (judged by X-Forwarded-Proto) or carries no
/// Host header to redirect against.
fn https_redirect_target(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    if proto.eq_ignore_ascii_case("https") {
        return None;
    }

    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok())?;
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    Some(format!("https://{}{}", host, path_and_query))
}
