//! Unified error type.

use thiserror::Error;

/// The error type returned by the service's fallible infrastructure.
///
/// Application-level errors (404, 415, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// transport failures: binding to a port, accepting a connection, or reading
/// a request body off the wire.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading request body: {0}")]
    Body(#[from] hyper::Error),
}
