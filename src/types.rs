use serde::{Deserialize, Deserializer, Serialize};

// UTILS
/// Read `null` the same way as an absent member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// PLACE STATUS ===============================================================
/// Status reported by the Places API in every response body.
///
/// Only `InvalidRequest` is turned into an error by the client; every other
/// value is handed back inside the result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum PlaceStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    /// Absent from the body, or `null`
    #[default]
    Missing,
    Other(String),
}

impl PlaceStatus {
    pub fn as_api_str(&self) -> &str {
        match self {
            PlaceStatus::Ok => "OK",
            PlaceStatus::ZeroResults => "ZERO_RESULTS",
            PlaceStatus::InvalidRequest => "INVALID_REQUEST",
            PlaceStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            PlaceStatus::RequestDenied => "REQUEST_DENIED",
            PlaceStatus::UnknownError => "UNKNOWN_ERROR",
            PlaceStatus::Missing => "",
            PlaceStatus::Other(s) => s,
        }
    }
}

impl From<String> for PlaceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => PlaceStatus::Ok,
            "ZERO_RESULTS" => PlaceStatus::ZeroResults,
            "INVALID_REQUEST" => PlaceStatus::InvalidRequest,
            "OVER_QUERY_LIMIT" => PlaceStatus::OverQueryLimit,
            "REQUEST_DENIED" => PlaceStatus::RequestDenied,
            "UNKNOWN_ERROR" => PlaceStatus::UnknownError,
            "" => PlaceStatus::Missing,
            _ => PlaceStatus::Other(s),
        }
    }
}

impl From<Option<String>> for PlaceStatus {
    fn from(s: Option<String>) -> Self {
        s.map_or(PlaceStatus::Missing, PlaceStatus::from)
    }
}

impl From<PlaceStatus> for String {
    fn from(status: PlaceStatus) -> Self {
        status.as_api_str().to_string()
    }
}

// GEOMETRY SCHEMAS ===========================================================
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct Geometry {
    #[serde(deserialize_with = "null_as_default")]
    pub location: LatLng,
    #[serde(deserialize_with = "null_as_default")]
    pub viewport: Viewport,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlusCode {
    pub compound_code: String,
    pub global_code: String,
}

// FIND PLACE SCHEMAS =========================================================
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Candidate {
    pub formatted_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub geometry: Geometry,
    pub icon: String,
    pub icon_background_color: String,
    pub icon_mask_base_uri: String,
    pub name: String,
    pub place_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plus_code: PlusCode,
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlaceResult {
    #[serde(deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
    pub status: PlaceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_candidate() {
        let body = r##"{
            "candidates": [{
                "formatted_address": "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France",
                "geometry": {
                    "location": {"lat": 48.8583701, "lng": 2.2944813},
                    "viewport": {
                        "northeast": {"lat": 48.86, "lng": 2.30},
                        "southwest": {"lat": 48.85, "lng": 2.29}
                    }
                },
                "icon": "https://maps.gstatic.com/mapfiles/place_api/icons/v1/png_71/generic_business-71.png",
                "icon_background_color": "#7B9EB0",
                "icon_mask_base_uri": "https://maps.gstatic.com/mapfiles/place_api/icons/v2/generic_pinlet",
                "name": "Eiffel Tower",
                "place_id": "ChIJLU7jZClu5kcR4PcOOO6p3I0",
                "plus_code": {"compound_code": "V75V+8Q Paris, France", "global_code": "8FW4V75V+8Q"},
                "types": ["tourist_attraction", "point_of_interest", "establishment"]
            }],
            "status": "OK"
        }"##;

        let result: PlaceResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.status, PlaceStatus::Ok);
        assert_eq!(result.error_message, None);

        let candidate = &result.candidates[0];
        assert_eq!(candidate.name, "Eiffel Tower");
        assert_eq!(candidate.icon_background_color, "#7B9EB0");
        assert_eq!(candidate.geometry.location.lat, 48.8583701);
        assert_eq!(candidate.geometry.viewport.southwest.lng, 2.29);
        assert_eq!(candidate.plus_code.global_code, "8FW4V75V+8Q");
        assert_eq!(candidate.types.len(), 3);
    }

    #[test]
    fn absent_nested_objects_default_to_zero() {
        let body = r#"{"candidates":[{"name":"Somewhere","geometry":{"location":{"lat":1.5,"lng":2.5}}}],"status":"OK"}"#;
        let result: PlaceResult = serde_json::from_str(body).unwrap();

        let candidate = &result.candidates[0];
        assert_eq!(candidate.geometry.viewport, Viewport::default());
        assert_eq!(candidate.plus_code, PlusCode::default());
        assert!(candidate.formatted_address.is_empty());
    }

    #[test]
    fn null_members_read_as_absent() {
        let result: PlaceResult =
            serde_json::from_str(r#"{"status":null,"candidates":null}"#).unwrap();
        assert_eq!(result.status, PlaceStatus::Missing);
        assert!(result.candidates.is_empty());

        let body = r#"{"candidates":[{"name":"Somewhere","geometry":{"location":null,"viewport":null},"plus_code":null,"types":null}],"status":"OK"}"#;
        let result: PlaceResult = serde_json::from_str(body).unwrap();
        let candidate = &result.candidates[0];
        assert_eq!(candidate.geometry, Geometry::default());
        assert_eq!(candidate.plus_code, PlusCode::default());
        assert!(candidate.types.is_empty());
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let result: PlaceResult =
            serde_json::from_str(r#"{"status":"NOT_FOUND","candidates":[]}"#).unwrap();
        assert_eq!(result.status, PlaceStatus::Other("NOT_FOUND".to_string()));
        assert_eq!(result.status.as_api_str(), "NOT_FOUND");
    }

    #[test]
    fn status_serializes_as_wire_string() {
        let json = serde_json::to_value(PlaceStatus::OverQueryLimit).unwrap();
        assert_eq!(json, serde_json::json!("OVER_QUERY_LIMIT"));
    }
}
