use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

/// Throttling knobs for the credential endpoints. Only `/auth` routes are
/// rate limited; data routes already require a valid token.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Seconds between replenished requests for one client.
    pub auth_per_second: u64,
    /// How many requests a single client may burst before throttling.
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            auth_per_second: 2,
            auth_burst_size: 10,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            auth_per_second: std::env::var("AUTH_RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            auth_burst_size: std::env::var("AUTH_RATE_LIMIT_BURST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Builds the governor configuration for the auth routes. Keys on the
    /// client ip taken from forwarding headers first, falling back to the
    /// peer address, so limits hold behind a reverse proxy.
    pub fn auth_governor_config(
        &self,
    ) -> GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Failed to build auth rate limiter config")
    }
}
