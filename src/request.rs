//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use http::HeaderMap;
use http_body_util::BodyExt;

use crate::error::Error;
use crate::method::Method;

/// Request body: still on the wire, or already in memory.
enum Body {
    Streaming(hyper::body::Incoming),
    Buffered(Bytes),
}

/// An incoming HTTP request.
///
/// The body is not read until a handler asks for it with
/// [`Request::body_bytes`], so handlers that never look at the body never
/// pay for it, and a handler that does can decide what a read failure means.
pub struct Request {
    method: Option<Method>,
    path: String,
    headers: HeaderMap,
    body: Body,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        parts: http::request::Parts,
        body: hyper::body::Incoming,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            method: Method::try_from(&parts.method).ok(),
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
            body: Body::Streaming(body),
            params,
        }
    }

    /// Builds a request whose body is already in memory.
    #[cfg(test)]
    pub(crate) fn buffered(
        method: impl Into<Option<Method>>,
        path: &str,
        headers: &[(&str, &str)],
        body: impl Into<Bytes>,
    ) -> Self {
        let headers = headers.iter()
            .map(|(k, v)| {
                (
                    http::HeaderName::from_bytes(k.as_bytes()).unwrap(),
                    http::HeaderValue::from_bytes(v.as_bytes()).unwrap(),
                )
            })
            .collect();
        Self {
            method: method.into(),
            path: path.to_owned(),
            headers,
            body: Body::Buffered(body.into()),
            params: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_owned(), value.to_owned());
        self
    }

    /// The request method, or `None` for extension methods outside RFC 9110
    /// (`MKCOL`, `PURGE`, ...). Those still reach the routed handler.
    pub fn method(&self) -> Option<Method> { self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Case-insensitive header lookup. Returns the first value, or `None` if
    /// the header is absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Like [`header`](Request::header), but never drops a present value:
    /// bytes that are not UTF-8 are replaced with `U+FFFD`.
    pub fn header_lossy(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.get(name).map(|v| String::from_utf8_lossy(v.as_bytes()))
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/projects/{id}`, `req.param("id")` on `/projects/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Reads the whole body into memory.
    ///
    /// The first call drains the connection; later calls return the same
    /// bytes. Fails if the client disconnects or sends a malformed body.
    pub async fn body_bytes(&mut self) -> Result<Bytes, Error> {
        let bytes = match std::mem::replace(&mut self.body, Body::Buffered(Bytes::new())) {
            Body::Buffered(bytes) => bytes,
            Body::Streaming(incoming) => incoming.collect().await?.to_bytes(),
        };
        self.body = Body::Buffered(bytes.clone());
        Ok(bytes)
    }

    /// Username and password from an `Authorization: Basic …` header.
    ///
    /// `None` when the header is missing, uses another scheme, is not valid
    /// base64, or has no `:` separator.
    pub fn basic_auth(&self) -> Option<(String, String)> {
        let value = self.header("authorization")?;
        let (scheme, encoded) = value.split_at_checked(6)?;
        if !scheme.eq_ignore_ascii_case("basic ") {
            return None;
        }
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (user, pass) = decoded.split_once(':')?;
        Some((user.to_owned(), pass.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_auth(value: &str) -> Request {
        Request::buffered(Method::Get, "/admin", &[("Authorization", value)], "")
    }

    #[test]
    fn header_lookup_ignores_name_case() {
        let req = Request::buffered(
            Method::Post,
            "/",
            &[("Content-Type", "application/json")],
            "",
        );
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn lossy_lookup_keeps_non_ascii_values() {
        let req = Request::buffered(Method::Post, "/", &[("content-type", "text/é")], "");
        assert_eq!(req.header("content-type"), None);
        assert_eq!(req.header_lossy("content-type").as_deref(), Some("text/é"));
        assert_eq!(req.header_lossy("accept"), None);
    }

    #[test]
    fn extension_methods_have_no_typed_method() {
        assert_eq!(Request::buffered(None::<Method>, "/", &[], "").method(), None);
        assert_eq!(Request::buffered(Method::Put, "/", &[], "").method(), Some(Method::Put));
    }

    #[tokio::test]
    async fn buffered_body_can_be_read_twice() {
        let mut req = Request::buffered(Method::Post, "/", &[], "payload");
        assert_eq!(req.body_bytes().await.unwrap(), "payload");
        assert_eq!(req.body_bytes().await.unwrap(), "payload");
    }

    #[test]
    fn basic_auth_decodes_user_and_password() {
        let req = with_auth(&format!("Basic {}", STANDARD.encode("admin:s3:cret")));
        assert_eq!(req.basic_auth(), Some(("admin".into(), "s3:cret".into())));
    }

    #[test]
    fn basic_auth_scheme_is_case_insensitive() {
        let req = with_auth(&format!("bAsIc {}", STANDARD.encode("admin:pw")));
        assert_eq!(req.basic_auth(), Some(("admin".into(), "pw".into())));
    }

    #[test]
    fn basic_auth_rejects_malformed_headers() {
        assert_eq!(with_auth("Bearer abc").basic_auth(), None);
        assert_eq!(with_auth("Basic !!!not-base64").basic_auth(), None);
        assert_eq!(with_auth(&format!("Basic {}", STANDARD.encode("nocolon"))).basic_auth(), None);
        assert_eq!(with_auth("Basic").basic_auth(), None);
        let req = Request::buffered(Method::Get, "/admin", &[], "");
        assert_eq!(req.basic_auth(), None);
    }
}
