use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Role value that grants `Permission::Admin`.
const ADMIN_ROLE: &str = "admin";

/// Identity carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Employee ID
    pub id: i32,
    pub email: String,
    pub role: String,
    /// Expiry as a unix timestamp in seconds
    pub exp: i64,
}

/// HS256 verification key derived from the shared secret.
///
/// Tokens are signed by the login service holding the same secret.
#[derive(Clone)]
pub struct TokenKeys {
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Validates signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}

pub enum Permission {
    Admin,
}

/// Authenticates a request from its `Authorization: Bearer` header and checks permissions.
pub struct AuthGuard<'a> {
    keys: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Requires a valid bearer token satisfying every listed permission.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Caller identity
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token in the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, malformed, or expired
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission is not met
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.keys.verify(token.trim())?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if claims.role != ADMIN_ROLE {
                        return Err(AuthError::AccessDenied(
                            claims.id,
                            "Employee attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
