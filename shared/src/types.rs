//! API request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request
///
/// Every field is required; requests arriving with any of them missing or
/// empty are rejected before the store is consulted. Fields are optional at
/// the serde level so an incomplete body deserializes and fails validation
/// with the documented message instead of a generic decode error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub age: Option<i32>,
    #[validate(required, length(min = 1))]
    pub company: Option<String>,
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Token returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One entry of the third-party public-APIs directory.
///
/// Field names mirror the upstream wire format and are passed through to
/// clients unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    #[serde(rename = "API")]
    pub api: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Auth")]
    pub auth: String,
    #[serde(rename = "HTTPS")]
    pub https: bool,
    #[serde(rename = "Cors")]
    pub cors: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Category")]
    pub category: String,
}

/// Envelope the upstream directory wraps its entries in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    #[serde(default)]
    pub count: i64,
    pub entries: Vec<DirectoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_register_request() -> RegisterRequest {
        RegisterRequest {
            name: Some("Ann".to_string()),
            age: Some(30),
            company: Some("Acme".to_string()),
            username: Some("ann".to_string()),
            password: Some("pw123".to_string()),
        }
    }

    #[test]
    fn register_request_with_all_fields_validates() {
        assert!(full_register_request().validate().is_ok());
    }

    #[test]
    fn register_request_missing_field_fails_validation() {
        let mut req = full_register_request();
        req.company = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn register_request_empty_string_fails_validation() {
        let mut req = full_register_request();
        req.username = Some(String::new());
        assert!(req.validate().is_err());
    }

    #[test]
    fn register_request_age_zero_is_accepted() {
        let mut req = full_register_request();
        req.age = Some(0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn login_request_requires_both_fields() {
        let req = LoginRequest {
            username: Some("ann".to_string()),
            password: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn directory_entry_uses_upstream_field_names() {
        let entry = DirectoryEntry {
            api: "Cat Facts".to_string(),
            description: "Daily cat facts".to_string(),
            auth: String::new(),
            https: true,
            cors: "no".to_string(),
            link: "https://catfact.ninja".to_string(),
            category: "Animals".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["API"], "Cat Facts");
        assert_eq!(json["HTTPS"], true);
        assert_eq!(json["Category"], "Animals");
    }

    #[test]
    fn directory_listing_tolerates_missing_count() {
        let listing: DirectoryListing =
            serde_json::from_str(r#"{"entries": []}"#).unwrap();
        assert_eq!(listing.count, 0);
        assert!(listing.entries.is_empty());
    }
}
