use serde::{Deserialize, Serialize};

/// Wire shape returned by the recommendation engine.
#[derive(Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub summary: RecommendationResponseSummary,
    pub nearest_hospitals: Vec<RecommendationResponseHospital>,
}

#[derive(Serialize, Deserialize)]
pub struct RecommendationResponseSummary {
    pub summary: String,
    pub keywords: RecommendationResponseKeywords,
}

/// The engine returns keywords either as one comma-separated string or as a
/// list of strings, depending on its extraction path.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationResponseKeywords {
    Text(String),
    List(Vec<String>),
}

impl RecommendationResponseKeywords {
    pub fn joined(self) -> String {
        match self {
            RecommendationResponseKeywords::Text(s) => s,
            RecommendationResponseKeywords::List(v) => v.join(", "),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RecommendationResponseHospital {
    pub hospital_name: String,
    pub address: String,
    pub tel1: String,
    pub distance_km: RecommendationResponseDistance,
    pub duration: String,
    pub arrival_time: String,
}

/// Distance arrives as a JSON number or a pre-formatted string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationResponseDistance {
    Number(f64),
    Text(String),
}

impl RecommendationResponseDistance {
    pub fn into_text(self) -> String {
        match self {
            RecommendationResponseDistance::Number(n) => n.to_string(),
            RecommendationResponseDistance::Text(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_accept_string_or_list() {
        let text: RecommendationResponseKeywords =
            serde_json::from_str("\"bleeding,trauma\"").unwrap();
        assert_eq!(text.joined(), "bleeding,trauma");

        let list: RecommendationResponseKeywords =
            serde_json::from_str("[\"bleeding\",\"trauma\"]").unwrap();
        assert_eq!(list.joined(), "bleeding, trauma");
    }

    #[test]
    fn distance_accepts_number_or_string() {
        let number: RecommendationResponseDistance = serde_json::from_str("1.2").unwrap();
        assert_eq!(number.into_text(), "1.2");

        let text: RecommendationResponseDistance = serde_json::from_str("\"1.2\"").unwrap();
        assert_eq!(text.into_text(), "1.2");
    }

    #[test]
    fn missing_hospital_field_is_an_error() {
        let body = r#"{
            "summary": {"summary": "s", "keywords": "k"},
            "nearest_hospitals": [{"hospital_name": "A", "address": "B"}]
        }"#;

        assert!(serde_json::from_str::<RecommendationResponse>(body).is_err());
    }
}
