use serde::{Deserialize, Serialize};

use marquee_core::{PlayId, ValueObject};

/// Play category; drives which pricing/credit rule applies.
///
/// Tags that are not recognised are kept as `Other` so that the rule lookup
/// can report exactly which genre is missing a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    Other(String),
}

impl Genre {
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Other(tag) => tag,
        }
    }
}

impl From<String> for Genre {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Other(tag),
        }
    }
}

impl From<&str> for Genre {
    fn from(tag: &str) -> Self {
        Genre::from(tag.to_string())
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry describing a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre,
        }
    }
}

impl ValueObject for Play {}

/// One showing of a play, as billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: PlayId, audience: u32) -> Self {
        Self { play_id, audience }
    }
}

impl ValueObject for Performance {}

/// Billing request for one customer. Performance order is preserved in the
/// rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_round_trips_known_and_unknown_tags() {
        assert_eq!(Genre::from("tragedy"), Genre::Tragedy);
        assert_eq!(Genre::from("comedy"), Genre::Comedy);
        assert_eq!(Genre::from("history"), Genre::Other("history".to_string()));
        assert_eq!(String::from(Genre::Comedy), "comedy");
        assert_eq!(Genre::Other("pastoral".into()).to_string(), "pastoral");
    }

    #[test]
    fn deserializes_fixture_shapes() {
        let play: Play = serde_json::from_str(r#"{"name": "Hamlet", "type": "tragedy"}"#).unwrap();
        assert_eq!(play, Play::new("Hamlet", Genre::Tragedy));

        let invoice: Invoice = serde_json::from_str(
            r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}"#,
        )
        .unwrap();
        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances[0].play_id.as_str(), "hamlet");
        assert_eq!(invoice.performances[0].audience, 55);
    }
}
