//! Middleware stack for the API server
//!
//! Request ids, HTTP tracing, timeouts, CORS and rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{Level, Span};
use volunteer_common::{AppError, CorsConfig, RateLimitConfig};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Span per request carrying the request id set by `SetRequestIdLayer`
#[derive(Debug, Clone, Copy, Default)]
struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Request ids, tracing and timeout, without rate limiting or CORS
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(RequestSpan)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    )
}

/// Full stack for API routes: rate limiting and configured CORS on top of
/// [`apply_middleware`]'s layers.
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit: &RateLimitConfig,
    cors: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    // One bucket for the whole server
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rate_limit.requests_per_second.into())
        .burst_size(rate_limit.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(|| {
            AppError::Config("rate limit requires non-zero rate and burst".to_string())
        })?;

    // Layers wrap outward: the last one added sees the request first
    let router = router
        .layer(create_cors_layer(cors, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RequestSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
        .layer(GovernorLayer {
            config: Arc::new(governor_conf),
        });

    Ok(router)
}

fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()]);

    if !is_production && config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        return base_layer.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}
