use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use unicode_normalization::UnicodeNormalization;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::display_name::DisplayName,
};

/// Lifetime of a participant access grant.
pub const GRANT_TTL: Duration = Duration::hours(2);

/// Lifetime of the short-lived admin grant used for management API calls.
pub const ROOM_ADMIN_GRANT_TTL: Duration = Duration::minutes(10);

/// Identity used when a display name has no slug-able characters left.
pub const FALLBACK_IDENTITY: &str = "guest";

// ============================================================================
// Claims
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub room_join: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub room_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MediaClaims {
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

// ============================================================================
// Minting
// ============================================================================

/// A participant credential for the media service.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub token: String,
    pub identity: String,
}

/// Issues a join/publish/subscribe grant for `room_name`, valid for [`GRANT_TTL`].
pub fn mint(
    display_name: &DisplayName,
    room_name: &str,
    api_key: &str,
    api_secret: &SecretString,
) -> AppResult<AccessGrant> {
    let identity = identity_for(display_name);
    let now = OffsetDateTime::now_utc().unix_timestamp();

    let claims = MediaClaims {
        iss: api_key.to_string(),
        sub: Some(identity.clone()),
        name: Some(display_name.as_str().to_string()),
        jti: Some(identity.clone()),
        nbf: now,
        exp: now + GRANT_TTL.whole_seconds(),
        video: VideoGrant {
            room: Some(room_name.to_string()),
            room_join: true,
            can_publish: Some(true),
            can_subscribe: Some(true),
            ..VideoGrant::default()
        },
    };

    let token = sign_claims(&claims, api_secret)?;
    Ok(AccessGrant { token, identity })
}

/// Issues a room-admin grant for server-side management API calls.
pub fn mint_room_admin(
    room_name: &str,
    api_key: &str,
    api_secret: &SecretString,
) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = MediaClaims {
        iss: api_key.to_string(),
        sub: None,
        name: None,
        jti: None,
        nbf: now,
        exp: now + ROOM_ADMIN_GRANT_TTL.whole_seconds(),
        video: VideoGrant {
            room: Some(room_name.to_string()),
            room_admin: true,
            ..VideoGrant::default()
        },
    };
    sign_claims(&claims, api_secret)
}

fn sign_claims(claims: &MediaClaims, api_secret: &SecretString) -> AppResult<String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(api_secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

// ============================================================================
// Identity
// ============================================================================

/// `<slug>-<8 hex chars>`; the random suffix keeps repeated names distinct.
pub fn identity_for(display_name: &DisplayName) -> String {
    format!("{}-{}", slugify(display_name.as_str()), random_suffix())
}

fn random_suffix() -> String {
    hex::encode(rand::random::<[u8; 4]>())
}

/// Lowercase ASCII slug: compatibility-decomposed, diacritics and symbols
/// stripped, whitespace runs turned into `-`. Falls back to [`FALLBACK_IDENTITY`].
pub fn slugify(input: &str) -> String {
    let stripped: String = input
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let slug = stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    if slug.is_empty() {
        FALLBACK_IDENTITY.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn api_secret() -> SecretString {
        SecretString::from("lk_secret_for_tests_0123456789".to_string())
    }

    fn decode_claims(token: &str, secret: &SecretString) -> MediaClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "nbf"]);
        decode::<MediaClaims>(
            token,
            &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            &validation,
        )
        .unwrap()
        .claims
    }

    #[test]
    fn slug_strips_diacritics_and_collapses_whitespace() {
        assert_eq!(slugify("Zoë  Ångström"), "zoe-angstrom");
        assert_eq!(slugify("  Leo   the Lion "), "leo-the-lion");
        assert_eq!(slugify("Dr. Who?!"), "dr-who");
        assert_eq!(slugify("snake_case-name"), "snake_case-name");
    }

    #[test]
    fn slug_falls_back_when_nothing_survives() {
        assert_eq!(slugify("😀🎉🔥"), FALLBACK_IDENTITY);
        assert_eq!(slugify("Лео"), FALLBACK_IDENTITY);
        assert_eq!(slugify("  !!  "), FALLBACK_IDENTITY);
    }

    #[test]
    fn identity_has_slug_and_hex_suffix() {
        let name = DisplayName::parse("Leo").unwrap();
        let identity = identity_for(&name);
        let (slug, suffix) = identity.rsplit_once('-').unwrap();
        assert_eq!(slug, "leo");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn repeated_names_get_distinct_identities() {
        let name = DisplayName::parse("Leo").unwrap();
        let first = mint(&name, "friends-room", "lk_key", &api_secret()).unwrap();
        let second = mint(&name, "friends-room", "lk_key", &api_secret()).unwrap();
        assert_ne!(first.identity, second.identity);
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn minted_grant_carries_identity_room_and_permissions() {
        let name = DisplayName::parse("Zoë K").unwrap();
        let grant = mint(&name, "friends-room", "lk_key", &api_secret()).unwrap();
        let claims = decode_claims(&grant.token, &api_secret());

        assert_eq!(claims.iss, "lk_key");
        assert_eq!(claims.sub.as_deref(), Some(grant.identity.as_str()));
        assert!(grant.identity.starts_with("zoe-k-"));
        assert_eq!(claims.name.as_deref(), Some("Zoë K"));
        assert_eq!(claims.exp - claims.nbf, GRANT_TTL.whole_seconds());
        assert_eq!(
            claims.video,
            VideoGrant {
                room: Some("friends-room".to_string()),
                room_join: true,
                room_admin: false,
                can_publish: Some(true),
                can_subscribe: Some(true),
            }
        );
    }

    #[test]
    fn grant_uses_camel_case_video_claims() {
        let name = DisplayName::parse("Leo").unwrap();
        let grant = mint(&name, "friends-room", "lk_key", &api_secret()).unwrap();
        let payload = grant.token.split('.').nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_slice(
            &base64::Engine::decode(
                &base64::engine::general_purpose::URL_SAFE_NO_PAD,
                payload,
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(json["video"]["roomJoin"], true);
        assert_eq!(json["video"]["canPublish"], true);
        assert_eq!(json["video"]["canSubscribe"], true);
        assert!(json["video"].get("roomAdmin").is_none());
    }

    #[test]
    fn grant_signed_with_other_secret_does_not_verify() {
        let name = DisplayName::parse("Leo").unwrap();
        let grant = mint(&name, "friends-room", "lk_key", &api_secret()).unwrap();
        let other = SecretString::from("a_different_secret".to_string());
        let result = decode::<MediaClaims>(
            &grant.token,
            &DecodingKey::from_secret(other.expose_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }

    #[test]
    fn room_admin_grant_is_limited_to_room_admin() {
        let token = mint_room_admin("friends-room", "lk_key", &api_secret()).unwrap();
        let claims = decode_claims(&token, &api_secret());
        assert!(claims.video.room_admin);
        assert!(!claims.video.room_join);
        assert_eq!(claims.video.room.as_deref(), Some("friends-room"));
        assert!(claims.sub.is_none());
    }
}
