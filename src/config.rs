//! Probe profiles and constants.
//!
//! Defines the fixed listen addresses and response bodies for the two
//! deployment probe instances, plus HTTP header and logging constants.
//! `ProbeConfig` is the profile struct consumed by the server and router.

use const_format::formatcp;

// =============================================================================
// Listen Addresses
// =============================================================================

/// All interfaces; the probes are reached from outside the container.
pub const BIND_HOST: &str = "0.0.0.0";

/// Port of the staging validation probe.
pub const STAGING_PORT: u16 = 5000;

/// Port of the production readiness probe.
pub const PRODUCTION_PORT: u16 = 6000;

// =============================================================================
// Response Bodies
// =============================================================================
// The deployment pipeline compares these strings byte-for-byte; any edit here
// must be mirrored in the pipeline's validation step.

/// Body served by the staging instance.
pub const STAGING_BODY: &str =
    "Test automated deployment successfully completed and validated";

/// Body served by the production instance.
pub const PRODUCTION_BODY: &str =
    "all test cases passed! Ready to deploy in production and port also updated in the script for container";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Smoke responses must never be served from an intermediary cache; a stale
/// 200 would mask a dead deployment.
pub const CACHE_CONTROL_STATUS: &str = "no-store";

/// `Server` header value identifying the probe build (compile-time string
/// concatenation).
pub const SERVER_IDENT: &str =
    formatcp!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "deploy_probe=info";

/// Fixed profile for one probe instance.
///
/// Ports and bodies are hardcoded literals, not configuration: the pipeline
/// scripts address each instance by port and grep for the exact body, so
/// there is deliberately nothing to override at runtime.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Instance name (used for logging and identification)
    pub instance: &'static str,
    /// Listen host
    pub host: &'static str,
    /// Listen port
    pub port: u16,
    /// Fixed response body for `GET /`
    pub body: &'static str,
}

impl ProbeConfig {
    /// Profile of the staging validation instance.
    pub fn staging() -> Self {
        Self {
            instance: "staging",
            host: BIND_HOST,
            port: STAGING_PORT,
            body: STAGING_BODY,
        }
    }

    /// Profile of the production readiness instance.
    pub fn production() -> Self {
        Self {
            instance: "production",
            host: BIND_HOST,
            port: PRODUCTION_PORT,
            body: PRODUCTION_BODY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_profile_matches_pipeline_contract() {
        let config = ProbeConfig::staging();
        assert_eq!(config.port, 5000);
        assert_eq!(
            config.body,
            "Test automated deployment successfully completed and validated"
        );
    }

    #[test]
    fn production_profile_matches_pipeline_contract() {
        let config = ProbeConfig::production();
        assert_eq!(config.port, 6000);
        assert_eq!(
            config.body,
            "all test cases passed! Ready to deploy in production and port also updated in the script for container"
        );
    }

    #[test]
    fn probes_bind_all_interfaces() {
        assert_eq!(ProbeConfig::staging().host, "0.0.0.0");
        assert_eq!(ProbeConfig::production().host, "0.0.0.0");
    }

    #[test]
    fn server_ident_names_the_package() {
        assert!(SERVER_IDENT.starts_with("deploy-probe/"));
    }
}
