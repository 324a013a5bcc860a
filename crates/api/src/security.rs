//! Security-related HTTP response headers

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers set on every response unless a handler already set them
pub const SECURITY_HEADERS: [(&str, &str); 5] = [
	("x-content-type-options", "nosniff"),
	("x-frame-options", "DENY"),
	("referrer-policy", "no-referrer"),
	("content-security-policy", "default-src 'none'; frame-ancestors 'none'"),
	("cache-control", "no-store"),
];

/// Apply the default security headers to the provided router.
///
/// Measurement data changes on every write, so responses are never cached.
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	let [nosniff, frame, referrer, csp, cache] = SECURITY_HEADERS
		.map(|(name, value)| (HeaderName::from_static(name), HeaderValue::from_static(value)));

	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(nosniff.0, nosniff.1))
			.layer(SetResponseHeaderLayer::if_not_present(frame.0, frame.1))
			.layer(SetResponseHeaderLayer::if_not_present(referrer.0, referrer.1))
			.layer(SetResponseHeaderLayer::if_not_present(csp.0, csp.1))
			.layer(SetResponseHeaderLayer::if_not_present(cache.0, cache.1)),
	)
}
