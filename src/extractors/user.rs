//! Extract the requested user id from `?user_id=` or the `X-User-Id` header.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// Header carrying the acting user id when the query parameter is absent.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Query parameter carrying the acting user id. Takes precedence over the header.
pub const USER_ID_QUERY: &str = "user_id";

/// User id explicitly named by the request, if any. Not an authenticated identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestedUser(pub Option<i64>);

/// Only plain ASCII digits count; signs, whitespace and overflow are ignored.
pub(crate) fn parse_numeric_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl RequestedUser {
    pub fn from_parts(parts: &Parts) -> Self {
        // First occurrence wins; a non-numeric first value falls through to the header.
        let from_query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == USER_ID_QUERY)
                    .and_then(|(_, value)| parse_numeric_id(&value))
            });
        let id = from_query.or_else(|| {
            parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_numeric_id)
        });
        RequestedUser(id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestedUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestedUser::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(uri: &str, header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(h) = header {
            builder = builder.header(USER_ID_HEADER, h);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn query_wins_over_header() {
        let p = parts("/users/favorites?user_id=4", Some("9"));
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(Some(4)));
    }

    #[test]
    fn non_numeric_query_falls_back_to_header() {
        let p = parts("/users/favorites?user_id=abc", Some("9"));
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(Some(9)));
    }

    #[test]
    fn repeated_query_key_uses_first_value() {
        let p = parts("/users/favorites?user_id=3&user_id=8", None);
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(Some(3)));

        let p = parts("/users/favorites?user_id=abc&user_id=2", Some("5"));
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(Some(5)));

        let p = parts("/users/favorites?user_id=abc&user_id=2", None);
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(None));
    }

    #[test]
    fn nothing_usable_yields_none() {
        let p = parts("/users/favorites?user_id=-1", Some(" 7"));
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(None));
        let p = parts("/users/favorites", None);
        assert_eq!(RequestedUser::from_parts(&p), RequestedUser(None));
    }

    #[test]
    fn numeric_parsing_rejects_overflow_and_empty() {
        assert_eq!(parse_numeric_id(""), None);
        assert_eq!(parse_numeric_id("99999999999999999999999"), None);
        assert_eq!(parse_numeric_id("0012"), Some(12));
    }
}
