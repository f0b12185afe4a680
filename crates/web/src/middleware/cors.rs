use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
            ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The configured CORS allow-list. An entry is an exact origin, `*`, or a
/// wildcard-subdomain pattern (`*.domain` matches any origin ending in
/// `.domain`).
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn from_comma_separated(origins_str: &str) -> Self {
        let origins = origins_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { origins }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }

        self.origins.iter().any(|allowed| {
            allowed == "*"
                || allowed == origin
                || allowed
                    .strip_prefix('*')
                    .is_some_and(|domain| domain.starts_with('.') && origin.ends_with(domain))
        })
    }
}

/// CORS gate. Applied outside the router so it runs before route dispatch:
/// preflights for method/path pairs with no registered route still
/// short-circuit here instead of falling through to a 404/405.
pub async fn cors(
    State(origins): State<AllowedOrigins>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let allowed = origins.is_allowed(&origin);

    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), allowed, &origin);
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), allowed, &origin);
    response
}

// The allow-origin header is only echoed for allowed origins; disallowed
// ones get no header and the browser blocks the response client-side.
fn apply_cors_headers(headers: &mut HeaderMap, allowed: bool, origin: &str) {
    if allowed {
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }

    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600"));
}
