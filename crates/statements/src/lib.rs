//! Theatre billing statements.
//!
//! Turns an invoice (customer + performances) and a play catalog into
//! statement data, then renders it as plain text or HTML. Pure domain logic:
//! no IO, no global state.

pub mod catalog;
pub mod config;
pub mod play;
pub mod render;
pub mod rules;
pub mod statement;

pub use catalog::PlayCatalog;
pub use config::{ComedyPricing, PricingConfig};
pub use play::{Genre, Invoice, Performance, Play};
pub use render::{render, render_html, render_plain_text, StatementFormat};
pub use rules::{base_volume_credits, ComedyRule, GenreRule, RuleBook, TragedyRule};
pub use statement::{create_statement_data, EnrichedPerformance, StatementBuilder, StatementData};

use marquee_core::DomainResult;

/// Build and render a statement in one step.
pub fn statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    rules: &RuleBook,
    format: StatementFormat,
) -> DomainResult<String> {
    let data = create_statement_data(invoice, catalog, rules)?;
    Ok(render(&data, format))
}
