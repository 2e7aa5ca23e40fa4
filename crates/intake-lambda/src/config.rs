use std::env;

use axum::http::HeaderValue;

/// Default cap on chief complaints accepted in one intake.
pub const DEFAULT_MAX_CHIEF_COMPLAINTS: usize = 3;

const MAX_CHIEF_COMPLAINTS_VAR: &str = "INTAKE_MAX_CHIEF_COMPLAINTS";
const CORS_ORIGIN_VAR: &str = "INTAKE_CORS_ORIGIN";

#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub max_chief_complaints: usize,
    pub cors_origin: CorsOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_chief_complaints: DEFAULT_MAX_CHIEF_COMPLAINTS,
            cors_origin: CorsOrigin::Any,
        }
    }
}

impl IntakeConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Unset or empty variables
    /// fall back to defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(raw) = lookup(MAX_CHIEF_COMPLAINTS_VAR) {
            let max: usize = raw.trim().parse().map_err(|e| {
                eyre::eyre!("{MAX_CHIEF_COMPLAINTS_VAR} must be a positive integer, got '{raw}': {e}")
            })?;
            if max == 0 {
                return Err(eyre::eyre!("{MAX_CHIEF_COMPLAINTS_VAR} must be at least 1"));
            }
            config.max_chief_complaints = max;
        }

        if let Some(raw) = lookup(CORS_ORIGIN_VAR) {
            let raw = raw.trim();
            config.cors_origin = if raw == "*" {
                CorsOrigin::Any
            } else {
                let value = HeaderValue::from_str(raw)
                    .map_err(|e| eyre::eyre!("{CORS_ORIGIN_VAR} is not a valid origin '{raw}': {e}"))?;
                CorsOrigin::Exact(value)
            };
        }

        Ok(config)
    }
}
