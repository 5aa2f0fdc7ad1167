use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Access tokens are valid for exactly 24 hours from issuance.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// A signed token together with the instant it stops being valid.
#[derive(Debug)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub fn issue_token(
    jwt_config: &JwtConfig,
    teacher_id: Uuid,
    user_name: &str,
    email: &str,
) -> Result<IssuedToken, AppError> {
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::seconds(TOKEN_TTL_SECONDS);

    let claims = Claims {
        sub: teacher_id.to_string(),
        name: user_name.to_string(),
        email: email.to_string(),
        jti: Uuid::new_v4().to_string(),
        iss: jwt_config.issuer.clone(),
        aud: jwt_config.audience.clone(),
        iat: issued_at.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign token: {}", e)))?;

    Ok(IssuedToken { token, expires_at })
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is exact: no tolerance for clock drift between issuer and verifier.
    validation.leeway = 0;
    validation.set_issuer(&[&jwt_config.issuer]);
    validation.set_audience(&[&jwt_config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
}
