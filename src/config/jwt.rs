use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Loads the token configuration. Issuer and audience have defaults;
    /// the signing secret does not.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "teacher-portal".to_string()),
            audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "teacher-portal-clients".to_string()),
        }
    }
}
