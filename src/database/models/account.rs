use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use crate::error::ApiError;

/// A persisted customer account. `id` and `date_joined` are assigned by the
/// server on creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: DateTime<Utc>,
}

/// Client-supplied account fields, as they arrive in POST/PUT bodies.
///
/// Everything is optional at the deserialization layer so that missing keys
/// surface as per-field validation errors rather than a serde failure.
/// Unknown keys (including `id` and `date_joined`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Validated mutable fields, ready to be written by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
}

impl AccountPayload {
    /// Check required fields and produce the validated field set.
    ///
    /// `name` must be present and non-blank; `email` and `address` must be
    /// present. `phone_number` stays optional.
    pub fn validate(self) -> Result<NewAccount, ApiError> {
        let mut field_errors: HashMap<String, String> = HashMap::new();

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => Some(name),
            Some(_) => {
                field_errors.insert("name".to_string(), "This field cannot be empty".to_string());
                None
            }
            None => {
                field_errors.insert("name".to_string(), "This field is required".to_string());
                None
            }
        };

        let email = match self.email {
            Some(email) => Some(email),
            None => {
                field_errors.insert("email".to_string(), "This field is required".to_string());
                None
            }
        };

        let address = match self.address {
            Some(address) => Some(address),
            None => {
                field_errors.insert("address".to_string(), "This field is required".to_string());
                None
            }
        };

        if !field_errors.is_empty() {
            return Err(ApiError::validation_error(
                "Missing required fields",
                Some(field_errors),
            ));
        }

        // Unwraps cannot fail past the field_errors check above
        Ok(NewAccount {
            name: name.unwrap(),
            email: email.unwrap(),
            address: address.unwrap(),
            phone_number: self.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> AccountPayload {
        AccountPayload {
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            address: Some("123 Main St".to_string()),
            phone_number: Some("555-1212".to_string()),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let fields = full_payload().validate().unwrap();
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.phone_number.as_deref(), Some("555-1212"));
    }

    #[test]
    fn phone_number_is_optional() {
        let payload = AccountPayload {
            phone_number: None,
            ..full_payload()
        };
        let fields = payload.validate().unwrap();
        assert!(fields.phone_number.is_none());
    }

    #[test]
    fn missing_fields_are_reported_individually() {
        let payload = AccountPayload {
            name: Some("not enough data".to_string()),
            ..Default::default()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
        match err {
            ApiError::ValidationError { field_errors, .. } => {
                let field_errors = field_errors.unwrap();
                assert!(field_errors.contains_key("email"));
                assert!(field_errors.contains_key("address"));
                assert!(!field_errors.contains_key("name"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let payload = AccountPayload {
            name: Some("   ".to_string()),
            ..full_payload()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn payload_ignores_unknown_keys() {
        let payload: AccountPayload = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "John Doe",
            "email": "john@example.com",
            "address": "123 Main St",
            "date_joined": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }
}
