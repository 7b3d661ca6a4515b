/*
[INPUT]:  Timestamp members in AWS JSON 1.1 bodies
[OUTPUT]: serde adapters for epoch-second timestamps
[POS]:    Data layer - wire format helpers
[UPDATE]: When timestamp formats accepted from the service change
*/

/// `Option<DateTime<Utc>>` as epoch seconds, millisecond precision.
///
/// Whole seconds are written as integers, anything finer as a fraction.
/// Decoding also accepts RFC 3339 strings.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Seconds(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(value) = value else {
            return serializer.serialize_none();
        };
        let millis = value.timestamp_millis();
        if millis % 1000 == 0 {
            serializer.serialize_i64(value.timestamp())
        } else {
            serializer.serialize_f64(millis as f64 / 1000.0)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        match raw {
            RawTimestamp::Seconds(seconds) => {
                let millis = (seconds * 1000.0).round() as i64;
                DateTime::from_timestamp_millis(millis)
                    .map(Some)
                    .ok_or_else(|| serde::de::Error::custom("timestamp out of range"))
            }
            RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|value| Some(value.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super::epoch_seconds")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn whole_seconds_encode_as_integers() {
        let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single();
        let value = serde_json::to_value(Stamped { at }).expect("serialize");
        assert_eq!(value, json!({ "at": 1_672_531_200 }));
    }

    #[test]
    fn fractional_seconds_keep_milliseconds() {
        let decoded: Stamped =
            serde_json::from_value(json!({ "at": 1_672_531_200.25 })).expect("deserialize");
        let expected = DateTime::from_timestamp_millis(1_672_531_200_250);
        assert_eq!(decoded.at, expected);

        let value = serde_json::to_value(&decoded).expect("serialize");
        assert_eq!(value, json!({ "at": 1_672_531_200.25 }));
    }

    #[test]
    fn rfc3339_text_is_accepted() {
        let decoded: Stamped =
            serde_json::from_value(json!({ "at": "2023-01-01T00:00:00Z" })).expect("deserialize");
        assert_eq!(decoded.at, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single());
    }

    #[test]
    fn missing_and_null_are_absent() {
        let missing: Stamped = serde_json::from_value(json!({})).expect("deserialize");
        let null: Stamped = serde_json::from_value(json!({ "at": null })).expect("deserialize");
        assert_eq!(missing.at, None);
        assert_eq!(null.at, None);
    }
}
