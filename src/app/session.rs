//! Session model: roles, users and JWT payload decoding.
//!
//! The backend issues a JWT on login. When the cached user record is missing
//! (cleared storage, older client) the identity is reconstructed from the
//! token's payload claims instead of forcing a re-login.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Account roles known to the console
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Pi,
    Agency,
    Hospital,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Pi => "PI",
            Role::Agency => "AGENCY",
            Role::Hospital => "HOSPITAL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "PI" => Some(Role::Pi),
            "AGENCY" => Some(Role::Agency),
            "HOSPITAL" => Some(Role::Hospital),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Pi => "Principal Investigator",
            Role::Agency => "Agency",
            Role::Hospital => "Hospital",
        }
    }
}

/// Authenticated user identity
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Raw role string; unknown values leave the session role-less
    #[serde(default)]
    pub role: String,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// JWT payload claims the console cares about
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Decode the payload segment of a JWT into a [`User`].
///
/// No signature verification happens here; the token is only trusted as far
/// as the backend accepts it. Returns `None` for anything that is not a
/// three-segment token with a base64url JSON payload.
pub fn decode_token(token: &str) -> Option<User> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    // id claim wins; sub may be a number or a numeric string
    let id = claims.id.or_else(|| match claims.sub? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    })?;

    Some(User {
        id,
        email: claims.email.unwrap_or_default(),
        username: None,
        role: claims.role.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.sig",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_id_email_role() {
        let token = make_token(r#"{"id":7,"email":"clinic@example.com","role":"HOSPITAL"}"#);
        let user = decode_token(&token).expect("token should decode");
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "clinic@example.com");
        assert_eq!(user.role(), Some(Role::Hospital));
    }

    #[test]
    fn falls_back_to_sub_claim() {
        let token = make_token(r#"{"sub":"42","email":"a@b.c","role":"AGENCY"}"#);
        let user = decode_token(&token).expect("token should decode");
        assert_eq!(user.id, 42);
        assert_eq!(user.role(), Some(Role::Agency));

        let token = make_token(r#"{"sub":42,"role":"ADMIN"}"#);
        let user = decode_token(&token).expect("token should decode");
        assert_eq!(user.id, 42);
        assert_eq!(user.role(), Some(Role::Admin));
    }

    #[test]
    fn unknown_role_is_roleless_not_invalid() {
        let token = make_token(r#"{"id":1,"role":"SUPERVISOR"}"#);
        let user = decode_token(&token).expect("token should decode");
        assert_eq!(user.role(), None);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(decode_token("").is_none());
        assert!(decode_token("not-a-jwt").is_none());
        assert!(decode_token("a.!!!notbase64!!!.c").is_none());
        // payload decodes but is not JSON
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
        assert!(decode_token(&token).is_none());
        // JSON but no usable identity
        let token = make_token(r#"{"email":"x@y.z"}"#);
        assert!(decode_token(&token).is_none());
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("hospital"), Some(Role::Hospital));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("PI"), Some(Role::Pi));
        assert_eq!(Role::parse(""), None);
    }
}
