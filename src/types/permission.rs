use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{ErrorKind, Result};

/// Permissions carried by a document update token.
///
/// See [`Client::share_document`](crate::Client::share_document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Permission {
    Write,
    Delete,
    Share,
    Webhooks,
}

impl Permission {
    const ALL: [Permission; 4] = [Self::Write, Self::Delete, Self::Share, Self::Webhooks];

    /// The id string used by the Gobin server for this permission.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Delete => "delete",
            Self::Share => "share",
            Self::Webhooks => "webhook",
        }
    }

    /// Bit assigned to this permission in a token's permission mask.
    #[must_use]
    pub const fn bit(&self) -> u32 {
        match self {
            Self::Write => 1 << 0,
            Self::Delete => 1 << 1,
            Self::Share => 1 << 2,
            Self::Webhooks => 1 << 3,
        }
    }

    /// Combines permissions into the raw mask used inside update tokens.
    #[must_use]
    pub fn mask(permissions: &[Permission]) -> u32 {
        permissions
            .iter()
            .fold(0, |mask, permission| mask | permission.bit())
    }

    /// Expands a raw permission mask back into the set of known permissions.
    #[must_use]
    pub fn from_mask(mask: u32) -> Vec<Permission> {
        Self::ALL
            .into_iter()
            .filter(|permission| mask & permission.bit() != 0)
            .collect()
    }
}

/// Claims decoded from a document update token.
///
/// Update tokens are JWTs; this decodes the claims without verifying the
/// signature, which only the server can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTokenClaims {
    /// The key of the document this token grants access to
    pub document_key: String,
    /// Permissions granted by this token
    pub permissions: Vec<Permission>,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    iat: i64,
    pms: u32,
    sub: String,
}

/// Decodes the claims of a document update token.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidUpdateToken`] if the token is not a
/// well-formed JWT or its claims do not have the expected shape.
pub fn decode_update_token(token: &str) -> Result<UpdateTokenClaims> {
    let claims = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ErrorKind::InvalidUpdateToken("not a JWT".to_string()))?;

    let decoded = URL_SAFE_NO_PAD
        .decode(claims)
        .map_err(|e| ErrorKind::InvalidUpdateToken(format!("claims are not base64: {e}")))?;

    let raw: RawClaims = serde_json::from_slice(&decoded)
        .map_err(|e| ErrorKind::InvalidUpdateToken(format!("unexpected claims shape: {e}")))?;

    Ok(UpdateTokenClaims {
        document_key: raw.sub,
        permissions: Permission::from_mask(raw.pms),
        issued_at: DateTime::from_timestamp(raw.iat, 0)
            .ok_or_else(|| ErrorKind::InvalidUpdateToken("issued-at out of range".to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mask_round_trip() {
        let permissions = vec![Permission::Write, Permission::Share];
        let mask = Permission::mask(&permissions);

        assert_eq!(mask, 0b101);
        assert_eq!(Permission::from_mask(mask), permissions);
    }

    #[test]
    fn unknown_bits_are_ignored() {
        assert_eq!(
            Permission::from_mask(0b1000_0010),
            vec![Permission::Delete]
        );
    }

    #[test]
    fn ids_match_server_names() {
        assert_eq!(Permission::Webhooks.id(), "webhook");
        assert_eq!(Permission::Write.id(), "write");
    }

    #[test]
    fn decodes_update_token_claims() {
        let claims = URL_SAFE_NO_PAD.encode(r#"{"iat":1700000000,"pms":7,"sub":"abc123"}"#);
        let token = format!("header.{claims}.signature");

        let decoded = decode_update_token(&token).unwrap();
        assert_eq!(decoded.document_key, "abc123");
        assert_eq!(
            decoded.permissions,
            vec![Permission::Write, Permission::Delete, Permission::Share]
        );
        assert_eq!(decoded.issued_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn rejects_token_without_claims() {
        assert!(matches!(
            decode_update_token("garbage"),
            Err(ErrorKind::InvalidUpdateToken(_))
        ));
    }
}
