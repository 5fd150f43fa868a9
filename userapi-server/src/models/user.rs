//! User record types

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A persisted user as presented to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Storage-assigned identifier, immutable once created
    pub id: String,
    pub name: String,
    pub status: String,
}

/// The mutable part of a user: `name` and `status`, always together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    status: String,
}

impl UserFields {
    /// Validate and build the field pair.
    ///
    /// Both values must contain something other than whitespace. No other
    /// constraint applies; `status` is free-form.
    ///
    /// # Example
    /// ```
    /// use userapi_server::models::UserFields;
    ///
    /// assert!(UserFields::new("Alice", "active").is_ok());
    /// assert!(UserFields::new("", "active").is_err());
    /// assert!(UserFields::new("Alice", "   ").is_err());
    /// ```
    pub fn new(name: &str, status: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if status.trim().is_empty() {
            return Err(ValidationError::Empty { field: "status" });
        }

        Ok(Self {
            name: name.to_owned(),
            status: status.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Attach an identifier, producing the API-facing record.
    pub fn into_record(self, id: impl Into<String>) -> UserRecord {
        UserRecord {
            id: id.into(),
            name: self.name,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_status_string() {
        let fields = UserFields::new("Bob", "on-leave (until May)").unwrap();
        assert_eq!(fields.status(), "on-leave (until May)");
    }

    #[test]
    fn rejects_empty_name() {
        let err = UserFields::new("", "active").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn rejects_blank_status() {
        let err = UserFields::new("Alice", " \t").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "status" });
    }

    #[test]
    fn name_is_checked_before_status() {
        let err = UserFields::new("", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn values_are_kept_verbatim() {
        let record = UserFields::new(" Alice ", "active")
            .unwrap()
            .into_record("abc");
        assert_eq!(record.name, " Alice ");
        assert_eq!(record.id, "abc");
    }

    #[test]
    fn record_serializes_with_id_name_status() {
        let record = UserFields::new("Alice", "active")
            .unwrap()
            .into_record("65f0c0ffee0000000000beef");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "65f0c0ffee0000000000beef",
                "name": "Alice",
                "status": "active"
            })
        );
    }
}
