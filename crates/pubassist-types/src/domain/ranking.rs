use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Journal ranking scheme, encoded on the wire as a one-digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankingType {
    #[serde(rename = "0")]
    ImpactFactor,
    #[serde(rename = "1")]
    MniswPoints,
    #[serde(rename = "2")]
    Eigenfactor,
}

impl fmt::Display for RankingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingType::ImpactFactor => write!(f, "impact factor"),
            RankingType::MniswPoints => write!(f, "MNiSW points"),
            RankingType::Eigenfactor => write!(f, "eigenfactor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(rename = "type")]
    pub kind: RankingType,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub value: Option<f64>,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

// Decimal columns are serialized as strings ("3.14100") by the backend.
fn deserialize_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(value)) => Ok(Some(value)),
        Some(Decimal::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_decimal_string() {
        let ranking: Ranking =
            serde_json::from_str(r#"{"type": "0", "value": "3.14100", "date": "2016-01-01"}"#)
                .unwrap();
        assert_eq!(ranking.kind, RankingType::ImpactFactor);
        assert_eq!(ranking.value, Some(3.141));
    }

    #[test]
    fn test_ranking_null_value() {
        let ranking: Ranking =
            serde_json::from_str(r#"{"type": "2", "value": null, "date": "2016-01-01"}"#).unwrap();
        assert_eq!(ranking.kind, RankingType::Eigenfactor);
        assert_eq!(ranking.value, None);
    }

    #[test]
    fn test_ranking_numeric_value() {
        let ranking: Ranking =
            serde_json::from_str(r#"{"type": "1", "value": 20, "date": "2017-06-30"}"#).unwrap();
        assert_eq!(ranking.value, Some(20.0));
    }
}
