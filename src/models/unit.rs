use serde::{Deserialize, Deserializer};

/// A monitored pool-control device, as reported by the units endpoint.
/// A snapshot of server state at fetch time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(deserialize_with = "deserialize_serial_number")]
    pub serial_number: i64,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub timezone: String,
    pub is_online: bool,
    pub date_last_data: String,
    pub has_error: bool,
}

impl Unit {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.serial_number.to_string())
    }
}

/// The API reports serial numbers sometimes as JSON numbers and sometimes
/// as numeric strings; coerce both to an integer.
fn deserialize_serial_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Serial {
        Number(i64),
        Text(String),
    }

    match Serial::deserialize(deserializer)? {
        Serial::Number(n) => Ok(n),
        Serial::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_serial_number_coerced() {
        let unit: Unit = serde_json::from_value(serde_json::json!({
            "serialNumber": "456",
            "type": "ASIN_AQUA",
            "timezone": "Europe/Prague",
            "isOnline": false,
            "dateLastData": "2026-08-28T22:15:00Z",
            "hasError": true,
        }))
        .unwrap();

        assert_eq!(unit.serial_number, 456);
        assert_eq!(unit.name, None);
        assert_eq!(unit.notes, None);
        assert!(unit.has_error);
    }

    #[test]
    fn test_numeric_serial_number() {
        let unit: Unit = serde_json::from_value(serde_json::json!({
            "serialNumber": 789,
            "type": "ASIN_AQUA",
            "name": "Backyard pool",
            "notes": "Salt water",
            "timezone": "UTC",
            "isOnline": true,
            "dateLastData": "2026-08-28T22:15:00Z",
            "hasError": false,
        }))
        .unwrap();

        assert_eq!(unit.serial_number, 789);
        assert_eq!(unit.name.as_deref(), Some("Backyard pool"));
        assert_eq!(unit.notes.as_deref(), Some("Salt water"));
    }

    #[test]
    fn test_display_name_falls_back_to_serial() {
        let unit: Unit = serde_json::from_value(serde_json::json!({
            "serialNumber": 42,
            "type": "ASIN_AQUA",
            "timezone": "UTC",
            "isOnline": true,
            "dateLastData": "2026-08-28T22:15:00Z",
            "hasError": false,
        }))
        .unwrap();

        assert_eq!(unit.display_name(), "42");
    }

    #[test]
    fn test_non_numeric_serial_string_is_error() {
        let result: Result<Unit, _> = serde_json::from_value(serde_json::json!({
            "serialNumber": "ABC-1",
            "type": "ASIN_AQUA",
            "timezone": "UTC",
            "isOnline": true,
            "dateLastData": "2026-08-28T22:15:00Z",
            "hasError": false,
        }));

        assert!(result.is_err());
    }
}
