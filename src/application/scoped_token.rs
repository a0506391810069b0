//! Stateless session tokens of the form `<scope-plaintext>.<signature>`.
//!
//! The plaintext is public, so all of the security rests on the signature.
//! Tokens carry no expiry of their own: the cookie Max-Age bounds their life,
//! and rotating the scope secret is the only way to revoke issued tokens.

use secrecy::{ExposeSecret, SecretString};

use crate::{
    application::signature::{constant_time_eq, sign},
    domain::entities::scope::Scope,
};

const SEPARATOR: char = '.';

/// The two halves of a well-formed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub value: &'a str,
    pub signature: &'a str,
}

pub fn encode(scope: Scope, secret: &SecretString) -> String {
    let value = scope.plaintext();
    format!(
        "{}{}{}",
        value,
        SEPARATOR,
        sign(value, secret.expose_secret())
    )
}

/// Splits a token into its halves. Anything other than exactly two non-empty
/// dot-separated segments is malformed.
pub fn decode(token: &str) -> Option<TokenParts<'_>> {
    let mut segments = token.split(SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(value), Some(signature), None) if !value.is_empty() && !signature.is_empty() => {
            Some(TokenParts { value, signature })
        }
        _ => None,
    }
}

/// True iff `token` was produced by [`encode`] for `scope` under `secret`.
pub fn verify(token: &str, scope: Scope, secret: &SecretString) -> bool {
    let Some(parts) = decode(token) else {
        return false;
    };

    let expected = sign(parts.value, secret.expose_secret());
    constant_time_eq(parts.signature.as_bytes(), expected.as_bytes())
        && parts.value == scope.plaintext()
}
