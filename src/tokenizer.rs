//! Splitter for comma-separated `key=value` header values with
//! quoted-string support, as used by the challenge and info headers.

use crate::{Error, Result};

/// One `key[=value]` pair. A challenge-mode bare token (a scheme label
/// such as `Basic`) has `value == None`. Values keep their surrounding
/// quotes; callers strip them with [`crate::utils::shave`].
#[derive(Debug, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Cursor over a single header field value.
pub struct Tokenizer<'a> {
    rest: &'a str,
    /// Challenge mode: a bare token with no `=` is a scheme label.
    is_challenge: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(value: &'a str, is_challenge: bool) -> Self {
        Tokenizer {
            rest: value,
            is_challenge,
        }
    }

    fn fail(&mut self) -> Error {
        let err = Error::InvalidHeaderSyntax(self.rest.to_string());
        self.rest = "";
        err
    }

    /// The next pair, `None` at end of input. After an error the cursor is
    /// exhausted; the caller discards the remaining tail.
    pub fn next_pair(&mut self) -> Result<Option<Pair<'a>>> {
        self.rest = self
            .rest
            .trim_start_matches([' ', '\t', '\r', '\n', ',']);
        if self.rest.is_empty() {
            return Ok(None);
        }

        let bytes = self.rest.as_bytes();
        let mut key_end = None;
        for (n, &b) in bytes.iter().enumerate() {
            match b {
                b'=' => {
                    key_end = Some((n, true));
                    break;
                }
                b' ' | b'\t' | b'\r' | b'\n' | b',' if self.is_challenge => {
                    key_end = Some((n, false));
                    break;
                }
                b',' => return Err(self.fail()),
                _ => {}
            }
        }

        let (key, has_value) = match key_end {
            Some((end, has_value)) => (&self.rest[..end], has_value),
            // Ran off the end of the string while reading the key.
            None if self.is_challenge => {
                let key = self.rest;
                self.rest = "";
                return Ok(Some(Pair { key, value: None }));
            }
            None => return Err(self.fail()),
        };
        if key.is_empty() {
            return Err(self.fail());
        }

        if !has_value {
            // Bare scheme label.
            self.rest = &self.rest[key.len()..];
            return Ok(Some(Pair { key, value: None }));
        }

        let after_eq = &self.rest[key.len() + 1..];
        let mut in_quotes = false;
        let mut value_end = after_eq.len();
        for (n, &b) in after_eq.as_bytes().iter().enumerate() {
            match b {
                b'"' => in_quotes = !in_quotes,
                b',' if !in_quotes => {
                    value_end = n;
                    break;
                }
                _ => {}
            }
        }
        if in_quotes {
            return Err(self.fail());
        }

        let value = &after_eq[..value_end];
        // Step past the separating comma, if any.
        self.rest = after_eq[value_end..].strip_prefix(',').unwrap_or("");
        Ok(Some(Pair {
            key,
            value: Some(value),
        }))
    }
}
