//! Pricing configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marquee_core::{DomainError, DomainResult};

/// Environment variable selecting the comedy pricing version.
pub const COMEDY_PRICING_ENV: &str = "MARQUEE_COMEDY_PRICING";

/// Which revision of the comedy price list is in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComedyPricing {
    /// 30000, plus 300 per seat once audience exceeds 20.
    #[default]
    Classic,
    /// 30000, plus 10000 and 500 per seat above 20 once audience exceeds 20,
    /// plus 300 per seat unconditionally.
    Tiered,
}

impl FromStr for ComedyPricing {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ComedyPricing::Classic),
            "tiered" => Ok(ComedyPricing::Tiered),
            other => Err(DomainError::validation(format!(
                "unknown comedy pricing: {other}"
            ))),
        }
    }
}

/// Settings consumed by [`crate::RuleBook::standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub comedy_pricing: ComedyPricing,
}

impl PricingConfig {
    /// Read overrides from the process environment.
    ///
    /// An unset variable falls back to the default; a set but unparseable one
    /// is an error.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PricingConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let comedy_pricing = match lookup(COMEDY_PRICING_ENV) {
            Some(raw) => raw.parse()?,
            None => {
                tracing::debug!("{COMEDY_PRICING_ENV} not set; using classic comedy pricing");
                ComedyPricing::default()
            }
        };

        Ok(Self { comedy_pricing })
    }
}
