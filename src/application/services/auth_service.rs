//! Authentication service for the admin passphrase and session tokens.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Reasons a session token is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("malformed session token")]
    Malformed,
    #[error("invalid session signature")]
    BadSignature,
    #[error("session expired")]
    Expired,
}

/// An issued session token with its expiry.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for authenticating the site owner.
///
/// Sessions are stateless tokens of the form `{expires}.{nonce}.{signature}`,
/// where the signature is a hex HMAC-SHA256 over `{expires}.{nonce}` keyed by
/// `signing_secret`. The same token works as the console cookie and as the
/// API Bearer token. Tokens cannot be revoked before they expire.
pub struct AuthService {
    passphrase: String,
    signing_secret: String,
    ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `passphrase` - admin passphrase accepted by [`AuthService::login`]
    /// - `signing_secret` - HMAC key for session tokens
    /// - `ttl_seconds` - session lifetime
    pub fn new(passphrase: String, signing_secret: String, ttl_seconds: u32) -> Self {
        Self {
            passphrase,
            signing_secret,
            ttl: Duration::seconds(i64::from(ttl_seconds)),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Checks the passphrase and issues a session.
    ///
    /// Both sides are compared as keyed MACs so the comparison runs in
    /// constant time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the passphrase does not match.
    pub fn login(&self, passphrase: &str) -> Result<Session, AppError> {
        let mut expected = self.mac();
        expected.update(self.passphrase.as_bytes());
        let expected = expected.finalize().into_bytes();

        let mut given = self.mac();
        given.update(passphrase.as_bytes());

        if given.verify_slice(&expected).is_err() {
            tracing::warn!("Rejected admin login");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid passphrase"}),
            ));
        }

        tracing::info!("Admin logged in");
        Ok(self.issue())
    }

    /// Issues a fresh session without checking the passphrase.
    ///
    /// Used by the operator CLI, which already has shell access.
    pub fn issue(&self) -> Session {
        self.issue_at(Utc::now())
    }

    fn issue_at(&self, now: DateTime<Utc>) -> Session {
        let expires_at = now + self.ttl;

        let mut nonce = [0u8; 16];
        rand::rng().fill(&mut nonce);

        let payload = format!(
            "{}.{}",
            expires_at.timestamp(),
            URL_SAFE_NO_PAD.encode(nonce)
        );
        let signature = self.sign(&payload);

        Session {
            token: format!("{payload}.{signature}"),
            expires_at,
        }
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verifies a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, forged or expired.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        self.verify_at(token, Utc::now()).map_err(|e| {
            tracing::debug!(reason = %e, "Session rejected");
            AppError::unauthorized("Unauthorized", json!({"reason": e.to_string()}))
        })
    }

    /// Checks a token's signature and expiry against `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<(), SessionError> {
        let (payload, signature) = token.rsplit_once('.').ok_or(SessionError::Malformed)?;
        let (expires, nonce) = payload.split_once('.').ok_or(SessionError::Malformed)?;

        let expires: i64 = expires.parse().map_err(|_| SessionError::Malformed)?;
        if nonce.is_empty() || nonce.contains('.') {
            return Err(SessionError::Malformed);
        }
        let signature = hex::decode(signature).map_err(|_| SessionError::Malformed)?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| SessionError::BadSignature)?;

        if now.timestamp() >= expires {
            return Err(SessionError::Expired);
        }

        Ok(())
    }
}
