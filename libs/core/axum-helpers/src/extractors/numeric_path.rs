//! Numeric path parameter extractor that never rejects on bad input.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single unsigned integer path parameter.
///
/// Segments that are not a base-10 `u64` (letters, signs, fractions,
/// overflow) are surfaced as `None` rather than rejected, so handlers can
/// treat them as lookups that match nothing.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::NumericPath;
///
/// async fn get_user(NumericPath(id): NumericPath) -> String {
///     match id {
///         Some(id) => format!("User ID: {}", id),
///         None => "no such user".to_string(),
///     }
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPath(pub Option<u64>);

impl<S> FromRequestParts<S> for NumericPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(NumericPath(parse_segment(&raw)))
    }
}

fn parse_segment(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn test_parse_segment() {
        assert_eq!(parse_segment("42"), Some(42));
        assert_eq!(parse_segment("007"), Some(7));
        assert_eq!(parse_segment("abc"), None);
        assert_eq!(parse_segment("+1"), None);
        assert_eq!(parse_segment("-1"), None);
        assert_eq!(parse_segment("1.5"), None);
        assert_eq!(parse_segment(""), None);
        assert_eq!(parse_segment("99999999999999999999999"), None);
    }

    async fn echo(NumericPath(id): NumericPath) -> String {
        format!("{:?}", id)
    }

    #[tokio::test]
    async fn test_extractor_does_not_reject_non_numeric() {
        let app = Router::new().route("/items/{id}", get(echo));

        for (uri, expected) in [("/items/12", "Some(12)"), ("/items/nope", "None")] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&bytes[..], expected.as_bytes());
        }
    }
}
