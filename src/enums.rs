use std::fmt;
use std::fmt::{Display, Formatter};

/// Authentication scheme tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Scheme {
    Basic,
    Digest,
    Negotiate,
}

impl Scheme {
    /// Match a scheme label from a challenge header, case-insensitively.
    /// Unknown labels return `None`, which discards the whole challenge list.
    pub fn from_token(s: &str) -> Option<Scheme> {
        if s.eq_ignore_ascii_case("basic") {
            Some(Scheme::Basic)
        } else if s.eq_ignore_ascii_case("digest") {
            Some(Scheme::Digest)
        } else if s.eq_ignore_ascii_case("gss-negotiate") {
            Some(Scheme::Negotiate)
        } else {
            None
        }
    }
}

impl Display for Scheme {
    /// Format to the label used in credential headers.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scheme::Basic => "Basic",
            Scheme::Digest => "Digest",
            Scheme::Negotiate => "GSS-Negotiate",
        })
    }
}

/// Digest hashing algorithm named by the challenge.
///
/// Anything other than `MD5` / `MD5-sess` parses as `Unknown`; an `Unknown`
/// algorithm rejects that challenge during validation rather than failing the
/// whole header.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Algorithm {
    Md5,
    Md5Sess,
    Unknown,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Md5
    }
}

impl Algorithm {
    pub fn from_token(s: &str) -> Algorithm {
        if s.eq_ignore_ascii_case("md5") {
            Algorithm::Md5
        } else if s.eq_ignore_ascii_case("md5-sess") {
            Algorithm::Md5Sess
        } else {
            Algorithm::Unknown
        }
    }
}

impl Display for Algorithm {
    /// Format to the form used in HTTP headers.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Md5Sess => "MD5-sess",
            Algorithm::Unknown => "unknown",
        })
    }
}

/// Quality of protection selected for a Digest session.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Qop {
    /// No qop directive given by the server (RFC 2069 compatibility).
    None,
    Auth,
    AuthInt,
}

impl Qop {
    /// The qop-value token, if this variant has a wire form.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Qop::None => None,
            Qop::Auth => Some("auth"),
            Qop::AuthInt => Some("auth-int"),
        }
    }
}

/// Which end of the connection a session authenticates against.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Target {
    /// Origin server: `Authorization` / `WWW-Authenticate` / 401.
    Server,
    /// Forward proxy: `Proxy-Authorization` / `Proxy-Authenticate` / 407.
    Proxy,
}

/// Verdict from `post_send`: carry on with this response, or replay the
/// request with fresh credentials.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Disposition {
    Continue,
    Retry,
}
