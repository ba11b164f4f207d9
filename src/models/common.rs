//! Shared value types of the Merchant API JSON mapping.
//!
//! The API encodes 64-bit integers as JSON strings, timestamps as RFC 3339
//! strings and civil date-times as objects with an IANA time zone id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde adapter for int64 fields, which travel as JSON strings.
///
/// Deserialization also accepts plain numbers.
pub mod int64 {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }

    /// Same encoding for `Option<i64>` fields.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<i64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(&v.to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<i64>, D::Error> {
            match Option::<super::Repr>::deserialize(deserializer)? {
                None => Ok(None),
                Some(super::Repr::Number(n)) => Ok(Some(n)),
                Some(super::Repr::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
            }
        }
    }

    /// Same encoding for repeated int64 fields.
    pub mod vec {
        use serde::ser::SerializeSeq;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(values.len()))?;
            for value in values {
                seq.serialize_element(&value.to_string())?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<i64>, D::Error> {
            Vec::<super::Repr>::deserialize(deserializer)?
                .into_iter()
                .map(|repr| match repr {
                    super::Repr::Number(n) => Ok(n),
                    super::Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
                })
                .collect()
        }
    }
}

/// Monetary amount in micros (1 USD = 1,000,000 micros).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(with = "int64")]
    pub amount_micros: i64,
    pub currency_code: String,
}

impl Price {
    pub fn micros(amount_micros: i64, currency_code: &str) -> Self {
        Self {
            amount_micros,
            currency_code: currency_code.to_string(),
        }
    }
}

/// Half-open time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Free-form attribute attached to products, promotions and reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_values: Vec<CustomAttribute>,
}

impl CustomAttribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
            group_values: Vec::new(),
        }
    }
}

/// IANA time zone reference (`{"id": "America/Los_Angeles"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone {
    pub id: String,
}

/// Civil date-time in a named time zone (`google.type.DateTime`).
///
/// Unset time-of-day fields mean midnight; a date-only value leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

impl CivilDateTime {
    /// Date with no time of day.
    pub fn date(year: i32, month: u32, day: u32, zone: &str) -> Self {
        Self {
            year,
            month,
            day,
            time_zone: Some(TimeZone { id: zone.to_string() }),
            ..Default::default()
        }
    }

    pub fn at(mut self, hours: u32, minutes: u32, seconds: Option<u32>) -> Self {
        self.hours = Some(hours);
        self.minutes = Some(minutes);
        self.seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_micros_are_strings_on_the_wire() {
        let json = serde_json::to_value(Price::micros(33_450_000, "USD")).unwrap();
        assert_eq!(json["amountMicros"], "33450000");

        let parsed: Price =
            serde_json::from_str(r#"{"amountMicros": 5000000, "currencyCode": "USD"}"#).unwrap();
        assert_eq!(parsed.amount_micros, 5_000_000);
    }

    #[test]
    fn date_only_civil_time_omits_clock_fields() {
        let json = serde_json::to_value(CivilDateTime::date(2025, 3, 27, "America/Los_Angeles"))
            .unwrap();
        assert!(json.get("hours").is_none());
        assert_eq!(json["timeZone"]["id"], "America/Los_Angeles");
    }
}
