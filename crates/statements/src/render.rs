//! Statement rendering.
//!
//! Renderers only format; every number comes precomputed in [`StatementData`].

use core::fmt::Write as _;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marquee_core::DomainError;

use crate::statement::StatementData;

/// Output format of a rendered statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    #[default]
    Text,
    Html,
}

impl FromStr for StatementFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(StatementFormat::Text),
            "html" => Ok(StatementFormat::Html),
            other => Err(DomainError::validation(format!(
                "unknown statement format: {other}"
            ))),
        }
    }
}

pub fn render(data: &StatementData, format: StatementFormat) -> String {
    match format {
        StatementFormat::Text => render_plain_text(data),
        StatementFormat::Html => render_html(data),
    }
}

pub fn render_plain_text(data: &StatementData) -> String {
    let mut out = format!("Statement for {}\n", data.customer);
    for perf in &data.performances {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            " {}: {} ({} seats)",
            perf.play.name, perf.amount, perf.audience
        );
    }
    let _ = writeln!(out, "Amount owed is {}", data.total_amount);
    let _ = writeln!(out, "You earned {} credits", data.total_volume_credits);
    out
}

pub fn render_html(data: &StatementData) -> String {
    let mut out = format!("<h1>Statement for {}</h1>\n", escape_html(&data.customer));
    out.push_str("<table>\n");
    out.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");
    for perf in &data.performances {
        let _ = writeln!(
            out,
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&perf.play.name),
            perf.audience,
            perf.amount
        );
    }
    out.push_str("</table>\n");
    let _ = writeln!(out, "<p>Amount owed is <em>{}</em></p>", data.total_amount);
    let _ = writeln!(
        out,
        "<p>You earned <em>{}</em> credits</p>",
        data.total_volume_credits
    );
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
