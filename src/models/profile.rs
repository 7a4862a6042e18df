// ABOUTME: Profile record model returned by the hosted profile data store

use serde::{Deserialize, Serialize};

/// One published profile as returned by the listing query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub full_name: String,
    pub professional_title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_shape() {
        let record: ProfileRecord = serde_json::from_str(
            r#"{
                "fullName": "Ada Lovelace",
                "professionalTitle": "Engineer",
                "bio": "First programmer",
                "profileImage": "https://example.com/ada.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.professional_title, "Engineer");
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"fullName": "A", "professionalTitle": "B"}"#).unwrap();
        assert_eq!(record.bio, "");
        assert_eq!(record.profile_image, "");
    }
}
