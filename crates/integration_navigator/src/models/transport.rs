//! Public transport departures near a stop

use serde::Deserialize;
use serde_json::Value;

/// Departures of a stop, sent as `[description, [departure, ...], ...]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct PublicTransport {
    /// Name of the stop
    pub description: String,
    /// Departures in the order the service lists them
    pub departures: Vec<Departure>,
}

/// A departure, sent as `[line, direction, eta, mode?]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct Departure {
    /// Line number, e.g. `85` or `E`
    pub line: String,
    /// Final stop
    pub direction: String,
    /// Minutes until departure, `0` when the server sends no number
    pub eta: i64,
    /// Vehicle type, `None` if not tram or bus
    pub mode: Option<TransportMode>,
}

/// Vehicle serving a departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Tram,
    Bus,
}

impl TransportMode {
    /// Wire token, `"t"` or `"b"`
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "t" => Some(Self::Tram),
            "b" => Some(Self::Bus),
            _ => None,
        }
    }
}

impl TryFrom<Vec<Value>> for PublicTransport {
    type Error = String;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let mut values = values.into_iter();
        let description = match values.next() {
            Some(Value::String(s)) => s,
            other => return Err(format!("expected stop description, got {other:?}")),
        };
        let departures = match values.next() {
            Some(list) => serde_json::from_value(list).map_err(|e| e.to_string())?,
            None => return Err("missing departure list".to_string()),
        };
        Ok(Self {
            description,
            departures,
        })
    }
}

impl TryFrom<Vec<Value>> for Departure {
    type Error = String;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        if values.len() < 3 {
            return Err(format!(
                "departure expects at least 3 values, got {}",
                values.len()
            ));
        }
        let mut values = values.into_iter();
        let line = text(values.next(), "line")?;
        let direction = text(values.next(), "direction")?;
        let eta = match values.next() {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            _ => 0,
        };
        let mode = match values.next() {
            Some(Value::String(s)) => TransportMode::from_token(&s),
            _ => None,
        };
        Ok(Self {
            line,
            direction,
            eta,
            mode,
        })
    }
}

fn text(value: Option<Value>, what: &str) -> Result<String, String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(format!("expected departure {what} as text, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_departures() {
        let json = r##"[
          "Helmholtzstraße",
          [
            ["85", "Löbtau Süd", "3", "b"],
            ["3", "Wilder Mann", "", "t"],
            ["61", "Weißig", 12],
            ["E", "Btf. Trachenberge", "7", "z"]
          ],
          null,
          {"85": "#1e4b9a"}
        ]"##;
        let transport: PublicTransport = serde_json::from_str(json).unwrap();
        assert_eq!(transport.description, "Helmholtzstraße");
        assert_eq!(transport.departures.len(), 4);

        let first = &transport.departures[0];
        assert_eq!(first.line, "85");
        assert_eq!(first.direction, "Löbtau Süd");
        assert_eq!(first.eta, 3);
        assert_eq!(first.mode, Some(TransportMode::Bus));

        assert_eq!(transport.departures[1].eta, 0);
        assert_eq!(transport.departures[1].mode, Some(TransportMode::Tram));
        assert_eq!(transport.departures[2].eta, 12);
        assert_eq!(transport.departures[2].mode, None);
        assert_eq!(transport.departures[3].mode, None);
    }

    #[test]
    fn test_short_departure_fails() {
        let err = serde_json::from_str::<Departure>(r#"["85", "Löbtau Süd"]"#).unwrap_err();
        assert!(err.to_string().contains("at least 3 values"));
    }

    #[test]
    fn test_numeric_line_fails() {
        assert!(serde_json::from_str::<Departure>(r#"[85, "Löbtau Süd", "3"]"#).is_err());
    }

    #[test]
    fn test_missing_departure_list_fails() {
        assert!(serde_json::from_str::<PublicTransport>(r#"["Helmholtzstraße"]"#).is_err());
    }
}
