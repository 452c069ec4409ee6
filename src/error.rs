use std::fmt::{self, Display, Formatter};
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// URI rejected by the parser.
    InvalidUri(String),
    /// Malformed %XX escape (or a non-UTF-8 decode result) in a path.
    BadEscape(String),
    /// Tokenizer gave up on a header value.
    InvalidHeaderSyntax(String),
    /// Server authentication failed after challenge processing.
    AuthRequired,
    /// Proxy authentication failed after challenge processing.
    ProxyAuthRequired,
    /// The server's Authentication-Info did not verify; possible tampering.
    AuthProtocol(String),
    /// Propagated unchanged from the HTTP engine.
    Transport(String),
}

pub type Result<T> = result::Result<T, Error>;

use Error::*;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUri(ctx) => write!(f, "Invalid URI: {}", ctx),
            BadEscape(ctx) => write!(f, "Bad escape sequence: {}", ctx),
            InvalidHeaderSyntax(ctx) => write!(f, "Invalid header syntax: {}", ctx),
            AuthRequired => write!(f, "Server was not authenticated correctly."),
            ProxyAuthRequired => write!(f, "Proxy server was not authenticated correctly."),
            AuthProtocol(ctx) => write!(f, "{}", ctx),
            Transport(ctx) => write!(f, "Transport error: {}", ctx),
        }
    }
}

impl std::error::Error for Error {}
