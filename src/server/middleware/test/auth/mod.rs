use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Claims, Permission, TokenKeys},
};


const SECRET: &str = "test-secret";

/// Builds request headers carrying `token` as a bearer credential
fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Signs a token the way the login service does, expiring `ttl` from now
fn sign(secret: &str, id: i32, role: &str, ttl: Duration) -> String {
    let claims = Claims {
        id,
        email: format!("employee{}@example.com", id),
        role: role.to_string(),
        exp: (Utc::now() + ttl).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Signs a day-long token with the shared test secret
fn issue(id: i32, role: &str) -> String {
    sign(SECRET, id, role, Duration::hours(24))
}
