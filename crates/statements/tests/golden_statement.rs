use marquee_core::{DomainError, PlayId};
use marquee_statements::{
    statement, ComedyPricing, Genre, Invoice, Performance, Play, PlayCatalog, PricingConfig,
    RuleBook, StatementFormat,
};

fn fixture_catalog() -> PlayCatalog {
    serde_json::from_str(include_str!("fixtures/plays.json")).expect("plays fixture parses")
}

fn fixture_invoice() -> Invoice {
    let invoices: Vec<Invoice> =
        serde_json::from_str(include_str!("fixtures/invoices.json")).expect("invoices fixture parses");
    invoices.into_iter().next().expect("at least one invoice")
}

fn rules(comedy_pricing: ComedyPricing) -> RuleBook {
    RuleBook::standard(&PricingConfig { comedy_pricing })
}

#[test]
fn plain_text_statement_matches_golden_output() {
    marquee_observability::init();

    let expected = "\
Statement for BigCo
 Hamlet: $650.00 (55 seats)
 As You Like It: $405.00 (35 seats)
 Othello: $500.00 (40 seats)
Amount owed is $1,555.00
You earned 47 credits
";

    let out = statement(
        &fixture_invoice(),
        &fixture_catalog(),
        &rules(ComedyPricing::Classic),
        StatementFormat::Text,
    )
    .unwrap();
    assert_eq!(out, expected);
}

#[test]
fn html_statement_with_tiered_comedy_pricing() {
    let expected = "\
<h1>Statement for BigCo</h1>
<table>
<tr><th>play</th><th>seats</th><th>cost</th></tr>
  <tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>
  <tr><td>As You Like It</td><td>35</td><td>$580.00</td></tr>
  <tr><td>Othello</td><td>40</td><td>$500.00</td></tr>
</table>
<p>Amount owed is <em>$1,730.00</em></p>
<p>You earned <em>47</em> credits</p>
";

    let out = statement(
        &fixture_invoice(),
        &fixture_catalog(),
        &rules(ComedyPricing::Tiered),
        StatementFormat::Html,
    )
    .unwrap();
    assert_eq!(out, expected);
}

#[test]
fn rendering_twice_is_identical() {
    let catalog = fixture_catalog();
    let invoice = fixture_invoice();
    let rules = rules(ComedyPricing::Classic);

    for format in [StatementFormat::Text, StatementFormat::Html] {
        let first = statement(&invoice, &catalog, &rules, format).unwrap();
        let second = statement(&invoice, &catalog, &rules, format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn unknown_play_produces_no_statement() {
    let mut invoice = fixture_invoice();
    invoice
        .performances
        .push(Performance::new(PlayId::new("macbeth").unwrap(), 12));

    let err = statement(
        &invoice,
        &fixture_catalog(),
        &rules(ComedyPricing::Classic),
        StatementFormat::Text,
    )
    .unwrap_err();
    assert_eq!(err, DomainError::UnknownPlay(PlayId::new("macbeth").unwrap()));
}

#[test]
fn catalog_genre_without_rule_is_rejected() {
    let mut catalog = fixture_catalog();
    catalog.insert(
        PlayId::new("henry-v").unwrap(),
        Play::new("Henry V", Genre::from("history")),
    );
    let invoice = Invoice {
        customer: "Agincourt Ltd".to_string(),
        performances: vec![Performance::new(PlayId::new("henry-v").unwrap(), 45)],
    };

    let err = statement(
        &invoice,
        &catalog,
        &rules(ComedyPricing::Classic),
        StatementFormat::Html,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported genre: history");
}

#[test]
fn shared_rule_book_serves_parallel_callers() {
    let catalog = fixture_catalog();
    let invoice = fixture_invoice();
    let rules = rules(ComedyPricing::Classic);
    let (catalog, invoice, rules) = (&catalog, &invoice, &rules);

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    statement(invoice, catalog, rules, StatementFormat::Text).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(outputs[0].ends_with("You earned 47 credits\n"));
}
