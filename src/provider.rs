//! Caller-supplied collaborators: credentials prompting, the negotiate
//! security context, and request-body pull for qop=auth-int.

use crate::Result;

/// A username/password pair returned by a [`CredentialsProvider`].
///
/// The engine wipes the password in place as soon as the credential
/// derivation has consumed it.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Supplies credentials for a realm. `attempt` counts prompts for the
/// current request, starting at 0; return `None` to cancel
/// authentication.
pub trait CredentialsProvider {
    fn credentials(&mut self, realm: &str, attempt: u32) -> Option<Credentials>;
}

impl<F> CredentialsProvider for F
where
    F: FnMut(&str, u32) -> Option<Credentials>,
{
    fn credentials(&mut self, realm: &str, attempt: u32) -> Option<Credentials> {
        self(realm, attempt)
    }
}

/// Pluggable security-context provider for the negotiate scheme.
///
/// `initiate` receives a host-based service principal (`khttp@hostname`)
/// and returns the initial context token to send, raw (the engine
/// base64-encodes it). Any error rejects the negotiate challenge.
pub trait SecurityProvider {
    fn initiate(&mut self, principal: &str) -> Result<Vec<u8>>;
}

/// Re-pullable request body, iterated during `pre_send` to digest the
/// entity for qop=auth-int. May yield no bytes at all.
pub trait BodySource {
    fn pull(&mut self, sink: &mut dyn FnMut(&[u8])) -> Result<()>;
}

impl BodySource for &[u8] {
    fn pull(&mut self, sink: &mut dyn FnMut(&[u8])) -> Result<()> {
        sink(*self);
        Ok(())
    }
}
