//! Statement data: the fully computed, render-ready view of an invoice.

use serde::{Deserialize, Serialize};

use marquee_core::{DomainError, DomainResult, Money, PlayId};

use crate::catalog::PlayCatalog;
use crate::play::{Invoice, Performance, Play};
use crate::rules::RuleBook;

/// A performance together with its play and computed charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPerformance {
    pub play_id: PlayId,
    pub audience: u32,
    pub play: Play,
    pub amount: Money,
    pub volume_credits: u64,
}

/// Everything a renderer needs; no field is computed lazily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    pub customer: String,
    pub performances: Vec<EnrichedPerformance>,
    pub total_amount: Money,
    pub total_volume_credits: u64,
}

/// Builds [`StatementData`] from an invoice against a catalog and rule book.
///
/// The builder only borrows its inputs; one instance can build any number of
/// statements.
#[derive(Debug, Clone, Copy)]
pub struct StatementBuilder<'a> {
    catalog: &'a PlayCatalog,
    rules: &'a RuleBook,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(catalog: &'a PlayCatalog, rules: &'a RuleBook) -> Self {
        Self { catalog, rules }
    }

    /// Enrich every performance in invoice order and total the result.
    ///
    /// Stops at the first unknown play or unsupported genre; no partial
    /// statement is returned.
    pub fn build(&self, invoice: &Invoice) -> DomainResult<StatementData> {
        let span = tracing::debug_span!("build_statement", customer = %invoice.customer);
        let _guard = span.enter();

        let performances = invoice
            .performances
            .iter()
            .map(|performance| self.enrich(performance))
            .collect::<DomainResult<Vec<_>>>()
            .inspect_err(|err| tracing::warn!(error = %err, "statement build failed"))?;

        let total_amount = Money::try_sum(performances.iter().map(|p| p.amount))?;
        let total_volume_credits = performances
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(p.volume_credits))
            .ok_or_else(|| DomainError::invariant("volume credit total overflow"))?;

        tracing::debug!(
            lines = performances.len(),
            total_amount = total_amount.cents(),
            total_volume_credits,
            "statement built"
        );

        Ok(StatementData {
            customer: invoice.customer.clone(),
            performances,
            total_amount,
            total_volume_credits,
        })
    }

    fn enrich(&self, performance: &Performance) -> DomainResult<EnrichedPerformance> {
        let play = self.catalog.lookup(&performance.play_id)?;
        let rule = self.rules.rule_for(&play.genre)?;

        let amount = rule.price_of(performance);
        let volume_credits = rule.credits_of(performance);
        tracing::debug!(
            play_id = %performance.play_id,
            audience = performance.audience,
            amount = amount.cents(),
            volume_credits,
            "performance enriched"
        );

        Ok(EnrichedPerformance {
            play_id: performance.play_id.clone(),
            audience: performance.audience,
            play: play.clone(),
            amount,
            volume_credits,
        })
    }
}

/// Shorthand for `StatementBuilder::new(catalog, rules).build(invoice)`.
pub fn create_statement_data(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    rules: &RuleBook,
) -> DomainResult<StatementData> {
    StatementBuilder::new(catalog, rules).build(invoice)
}
