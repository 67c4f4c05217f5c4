//! Password-gated admin page.

use tracing::warn;

use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The only username the portal accepts.
pub const ADMIN_USER: &str = "admin";

const DASHBOARD_HTML: &str = "<html><h1> Welcome to the admin dashboard </h1></html>";

/// Serves a static page to callers presenting `admin` and the configured
/// password over HTTP Basic authentication.
pub struct AdminPortal {
    password: String,
}

impl AdminPortal {
    pub fn new(password: impl Into<String>) -> Self {
        Self { password: password.into() }
    }

    /// Any method is accepted. Every credential failure gets the same empty
    /// 401, so callers cannot tell which part was wrong.
    pub fn handle(&self, req: &Request) -> Response {
        let authorized = req.basic_auth()
            .is_some_and(|(user, pass)| user == ADMIN_USER && pass == self.password);

        if !authorized {
            warn!(path = req.path(), "admin login rejected");
            return Response::status(Status::Unauthorized);
        }

        Response::html(DASHBOARD_HTML)
    }
}

impl std::fmt::Debug for AdminPortal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPortal").field("password", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;

    use super::*;
    use crate::method::Method;

    fn request(credentials: Option<&str>) -> Request {
        let header = credentials.map(|c| format!("Basic {}", STANDARD.encode(c)));
        let headers: Vec<(&str, &str)> = header.iter().map(|h| ("authorization", h.as_str())).collect();
        Request::buffered(Method::Get, "/admin", &headers, "")
    }

    #[test]
    fn correct_credentials_get_dashboard() {
        let resp = AdminPortal::new("hunter2").handle(&request(Some("admin:hunter2")));
        assert_eq!(resp.status_code(), Status::Ok);
        assert_eq!(resp.content_type(), Some("text/html; charset=utf-8"));
        let body = std::str::from_utf8(resp.body()).unwrap();
        assert!(body.contains("Welcome to the admin dashboard"));
    }

    #[test]
    fn every_failure_is_the_same_empty_401() {
        let portal = AdminPortal::new("hunter2");
        for creds in [None, Some("root:hunter2"), Some("admin:wrong"), Some("admin:"), Some("Admin:hunter2")] {
            let resp = portal.handle(&request(creds));
            assert_eq!(resp.status_code(), Status::Unauthorized, "{creds:?}");
            assert!(resp.body().is_empty());
            assert!(resp.content_type().is_none());
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let out = format!("{:?}", AdminPortal::new("hunter2"));
        assert!(!out.contains("hunter2"));
    }
}
