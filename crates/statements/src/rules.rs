//! Per-genre pricing and volume-credit rules.
//!
//! Each genre has one rule object that answers both questions a statement
//! needs (how much, how many credits). [`RuleBook`] is the only place that
//! dispatches on genre.

use std::collections::HashMap;

use marquee_core::{DomainError, DomainResult, Money};

use crate::config::{ComedyPricing, PricingConfig};
use crate::play::{Genre, Performance};

/// Audience size above which every genre earns volume credits.
pub const BASE_CREDIT_THRESHOLD: u32 = 30;

/// Genre-independent volume credits: one per seat above the threshold.
pub fn base_volume_credits(performance: &Performance) -> u64 {
    u64::from(performance.audience.saturating_sub(BASE_CREDIT_THRESHOLD))
}

/// Pricing and credit capabilities for one genre.
pub trait GenreRule: core::fmt::Debug + Send + Sync {
    /// Genre this rule is registered under.
    fn genre(&self) -> Genre;

    /// Amount owed for one performance.
    fn price_of(&self, performance: &Performance) -> Money;

    /// Volume credits earned by one performance.
    fn credits_of(&self, performance: &Performance) -> u64 {
        base_volume_credits(performance)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TragedyRule;

impl GenreRule for TragedyRule {
    fn genre(&self) -> Genre {
        Genre::Tragedy
    }

    fn price_of(&self, performance: &Performance) -> Money {
        let audience = u64::from(performance.audience);
        let mut cents = 40_000;
        if audience > 30 {
            cents += 1_000 * (audience - 30);
        }
        Money::from_cents(cents)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComedyRule {
    pricing: ComedyPricing,
}

impl ComedyRule {
    pub fn new(pricing: ComedyPricing) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> ComedyPricing {
        self.pricing
    }
}

impl GenreRule for ComedyRule {
    fn genre(&self) -> Genre {
        Genre::Comedy
    }

    fn price_of(&self, performance: &Performance) -> Money {
        let audience = u64::from(performance.audience);
        let mut cents = 30_000;
        match self.pricing {
            ComedyPricing::Classic => {
                if audience > 20 {
                    cents += 300 * audience;
                }
            }
            ComedyPricing::Tiered => {
                if audience > 20 {
                    cents += 10_000 + 500 * (audience - 20);
                }
                cents += 300 * audience;
            }
        }
        Money::from_cents(cents)
    }

    fn credits_of(&self, performance: &Performance) -> u64 {
        // One extra credit for every five comedy attendees.
        base_volume_credits(performance) + u64::from(performance.audience / 5)
    }
}

/// Dispatch table from genre to its rule.
#[derive(Debug, Default)]
pub struct RuleBook {
    rules: HashMap<Genre, Box<dyn GenreRule>>,
}

impl RuleBook {
    /// An empty rule book; every lookup fails until rules are registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rule book with the built-in tragedy and comedy rules.
    pub fn standard(config: &PricingConfig) -> Self {
        let mut book = Self::empty();
        book.register(TragedyRule);
        book.register(ComedyRule::new(config.comedy_pricing));
        book
    }

    /// Register `rule` under its genre, replacing any previous rule for that
    /// genre. Rules for other genres are untouched.
    pub fn register<R>(&mut self, rule: R) -> Option<Box<dyn GenreRule>>
    where
        R: GenreRule + 'static,
    {
        let genre = rule.genre();
        tracing::debug!(genre = %genre, "registering genre rule");
        self.rules.insert(genre, Box::new(rule))
    }

    pub fn rule_for(&self, genre: &Genre) -> DomainResult<&dyn GenreRule> {
        self.rules
            .get(genre)
            .map(|rule| rule.as_ref())
            .ok_or_else(|| DomainError::unsupported_genre(genre.as_str()))
    }

    pub fn genres(&self) -> impl Iterator<Item = &Genre> {
        self.rules.keys()
    }
}
