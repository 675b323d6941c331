use serde::{Deserialize, Serialize};

/// Raw trip request as submitted by the booking form.
///
/// Field names mirror the wire payload (`from`, `to`, `departureDate`, ...).
/// `travel_class` and `trip_type` are carried for callers but not interpreted
/// by the planning core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    /// Accepted as a JSON number or a numeric string; missing means one traveler.
    #[serde(default)]
    pub passengers: Option<PassengerCount>,
    /// Budget tier label; missing or unrecognized labels fall back to "mid".
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub travel_class: Option<String>,
    #[serde(default)]
    pub trip_type: Option<String>,
}

/// Passenger count as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassengerCount {
    Number(u32),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_request() {
        let request: TripRequest = serde_json::from_value(json!({
            "from": "Delhi (DEL)",
            "to": "Mumbai (BOM)",
            "departureDate": "2025-10-15",
            "returnDate": "2025-10-18",
            "passengers": "2",
            "travelClass": "economy",
            "tripType": "roundtrip",
            "budget": "mid"
        }))
        .unwrap();

        assert_eq!(request.origin, "Delhi (DEL)");
        assert_eq!(request.destination, "Mumbai (BOM)");
        assert!(matches!(
            request.passengers,
            Some(PassengerCount::Text(ref s)) if s == "2"
        ));
        assert_eq!(request.travel_class.as_deref(), Some("economy"));
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let request: TripRequest = serde_json::from_value(json!({
            "from": "Pune",
            "to": "Goa"
        }))
        .unwrap();

        assert!(request.departure_date.is_none());
        assert!(request.passengers.is_none());
        assert!(request.budget.is_none());
    }

    #[test]
    fn test_numeric_passenger_count() {
        let request: TripRequest = serde_json::from_value(json!({
            "from": "A",
            "to": "B",
            "passengers": 4
        }))
        .unwrap();

        assert!(matches!(
            request.passengers,
            Some(PassengerCount::Number(4))
        ));
    }
}
