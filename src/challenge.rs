//! Challenge-header parsing: one `WWW-Authenticate` or
//! `Proxy-Authenticate` field value becomes an ordered list of candidate
//! challenges tagged by scheme.

use crate::enums::{Algorithm, Scheme};
use crate::tokenizer::Tokenizer;
use crate::utils::shave;
use log::debug;

/// A parsed challenge. Borrows from the header value; the list never
/// outlives challenge processing.
#[derive(Debug, PartialEq, Eq)]
pub struct Challenge<'a> {
    pub scheme: Scheme,
    pub realm: Option<&'a str>,
    pub nonce: Option<&'a str>,
    pub opaque: Option<&'a str>,
    /// The nonce expired but the credentials remain valid.
    pub stale: bool,
    /// A qop directive was present, whatever its tokens were.
    pub got_qop: bool,
    pub qop_auth: bool,
    pub qop_auth_int: bool,
    pub alg: Algorithm,
}

impl<'a> Challenge<'a> {
    fn new(scheme: Scheme) -> Self {
        Challenge {
            scheme,
            realm: None,
            nonce: None,
            opaque: None,
            stale: false,
            got_qop: false,
            qop_auth: false,
            qop_auth_int: false,
            alg: Algorithm::default(),
        }
    }
}

/// Parse a complete challenge header value into candidate challenges, in
/// order of appearance. An unrecognised scheme label discards the whole
/// list; a tokenizer error discards only the remaining tail.
pub fn parse_challenges(value: &str) -> Vec<Challenge<'_>> {
    let mut tok = Tokenizer::new(value, true);
    let mut challenges: Vec<Challenge<'_>> = Vec::new();

    loop {
        let pair = match tok.next_pair() {
            Ok(Some(pair)) => pair,
            Ok(None) => break,
            Err(_) => {
                debug!("malformed challenge parameters, discarding tail");
                break;
            }
        };

        let Some(raw) = pair.value else {
            match Scheme::from_token(pair.key) {
                Some(scheme) => challenges.push(Challenge::new(scheme)),
                None => {
                    debug!("unknown auth scheme [{}]", pair.key);
                    return Vec::new();
                }
            }
            continue;
        };

        // Parameters before the first scheme label are skipped.
        let Some(chall) = challenges.last_mut() else {
            continue;
        };

        let val = shave(raw, "\"'");
        let key = pair.key;
        if key.eq_ignore_ascii_case("realm") {
            chall.realm = Some(val);
        } else if key.eq_ignore_ascii_case("nonce") {
            chall.nonce = Some(val);
        } else if key.eq_ignore_ascii_case("opaque") {
            chall.opaque = Some(val);
        } else if key.eq_ignore_ascii_case("stale") {
            chall.stale = val.eq_ignore_ascii_case("true");
        } else if key.eq_ignore_ascii_case("algorithm") {
            chall.alg = Algorithm::from_token(val);
        } else if key.eq_ignore_ascii_case("qop") {
            chall.got_qop = true;
            for token in val.split(',') {
                let token = token.trim();
                if token.eq_ignore_ascii_case("auth") {
                    chall.qop_auth = true;
                } else if token.eq_ignore_ascii_case("auth-int") {
                    chall.qop_auth_int = true;
                }
            }
        }
    }

    challenges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digest() {
        let challs = parse_challenges(
            r#"Digest realm="testrealm@host.com", qop="auth,auth-int", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", opaque="5ccc069c403ebaf9f0171e9517f40e41""#,
        );
        assert_eq!(challs.len(), 1);
        let c = &challs[0];
        assert_eq!(c.scheme, Scheme::Digest);
        assert_eq!(c.realm, Some("testrealm@host.com"));
        assert_eq!(c.nonce, Some("dcd98b7102dd2f0e8b11d0f600bfb0c093"));
        assert_eq!(c.opaque, Some("5ccc069c403ebaf9f0171e9517f40e41"));
        assert!(c.got_qop && c.qop_auth && c.qop_auth_int);
        assert!(!c.stale);
        assert_eq!(c.alg, Algorithm::Md5);
    }

    #[test]
    fn test_multiple_schemes_in_order() {
        let challs = parse_challenges(r#"Basic realm="b", Digest realm="d", nonce="n""#);
        assert_eq!(challs.len(), 2);
        assert_eq!(challs[0].scheme, Scheme::Basic);
        assert_eq!(challs[0].realm, Some("b"));
        assert_eq!(challs[1].scheme, Scheme::Digest);
        assert_eq!(challs[1].realm, Some("d"));
        assert_eq!(challs[1].nonce, Some("n"));
    }

    #[test]
    fn test_unknown_scheme_discards_all() {
        let challs = parse_challenges(r#"Basic realm="b", Bearer realm="t""#);
        assert!(challs.is_empty());
    }

    #[test]
    fn test_stale_and_algorithm() {
        let challs =
            parse_challenges(r#"Digest realm="r", nonce="n", stale=TRUE, algorithm=MD5-sess"#);
        assert!(challs[0].stale);
        assert_eq!(challs[0].alg, Algorithm::Md5Sess);

        let challs = parse_challenges(r#"Digest realm="r", nonce="n", stale=no, algorithm=token"#);
        assert!(!challs[0].stale);
        assert_eq!(challs[0].alg, Algorithm::Unknown);
    }

    #[test]
    fn test_gss_negotiate_label() {
        let challs = parse_challenges("GSS-Negotiate");
        assert_eq!(challs.len(), 1);
        assert_eq!(challs[0].scheme, Scheme::Negotiate);
    }

    #[test]
    fn test_parameters_before_scheme_skipped() {
        let challs = parse_challenges(r#"realm="orphan", Basic realm="b""#);
        assert_eq!(challs.len(), 1);
        assert_eq!(challs[0].realm, Some("b"));
    }

    #[test]
    fn test_malformed_tail_keeps_parsed_prefix() {
        let challs = parse_challenges(r#"Basic realm="b", ="#);
        assert_eq!(challs.len(), 1);
        assert_eq!(challs[0].realm, Some("b"));
    }

    #[test]
    fn test_unrecognised_qop_tokens_set_no_flags() {
        let challs = parse_challenges(r#"Digest realm="r", nonce="n", qop="custom""#);
        assert!(challs[0].got_qop);
        assert!(!challs[0].qop_auth && !challs[0].qop_auth_int);
    }
}
