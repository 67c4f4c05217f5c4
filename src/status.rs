//! HTTP status codes as a typed enum.
//!
//! Only the codes the service actually answers with. Use [`Status`] anywhere
//! a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use projects_api::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::UnsupportedMediaType)
//!     .text("need content-type application/json");
//! ```

/// Status codes emitted by the project service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                   // 200
    BadRequest,           // 400
    Unauthorized,         // 401
    NotFound,             // 404
    MethodNotAllowed,     // 405
    UnsupportedMediaType, // 415
    InternalServerError,  // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                   => 200,
            Status::BadRequest           => 400,
            Status::Unauthorized         => 401,
            Status::NotFound             => 404,
            Status::MethodNotAllowed     => 405,
            Status::UnsupportedMediaType => 415,
            Status::InternalServerError  => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok                   => http::StatusCode::OK,
            Status::BadRequest           => http::StatusCode::BAD_REQUEST,
            Status::Unauthorized         => http::StatusCode::UNAUTHORIZED,
            Status::NotFound             => http::StatusCode::NOT_FOUND,
            Status::MethodNotAllowed     => http::StatusCode::METHOD_NOT_ALLOWED,
            Status::UnsupportedMediaType => http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Status::InternalServerError  => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
