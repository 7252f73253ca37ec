use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Longest accepted login, counted in characters
pub const LOGIN_MAX_CHARS: usize = 64;

/// Ids are assigned by storage; a client-supplied one is refused.
fn reject_client_id(_id: i64) -> Result<(), ValidationError> {
    Err(ValidationError::new("id_not_allowed")
        .with_message(Cow::Borrowed("id is assigned by the server and must not be sent")))
}

/// A persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice", min_length = 1, max_length = 64)]
    pub login: String,
}

/// Payload of `POST /user`.
///
/// Both fields are optional at the JSON level so a missing login is
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Must be absent or null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "reject_client_id"))]
    #[schema(read_only)]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(required, length(min = 1, max = 64))]
    #[schema(example = "alice", min_length = 1, max_length = 64)]
    pub login: Option<String>,
}

impl CreateUser {
    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            id: None,
            login: Some(login.into()),
        }
    }
}

/// A validated user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
}

impl TryFrom<CreateUser> for NewUser {
    type Error = ValidationErrors;

    fn try_from(input: CreateUser) -> Result<Self, Self::Error> {
        input.validate()?;

        let Some(login) = input.login else {
            let mut errors = ValidationErrors::new();
            errors.add("login", ValidationError::new("required"));
            return Err(errors);
        };

        Ok(NewUser { login })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_codes(input: CreateUser, field: &str) -> Vec<String> {
        let errors = NewUser::try_from(input).unwrap_err();
        errors
            .field_errors()
            .get(field)
            .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_login_bounds_are_inclusive() {
        for len in [1, 32, LOGIN_MAX_CHARS] {
            let login = "a".repeat(len);
            let user = NewUser::try_from(CreateUser::with_login(login.clone())).unwrap();
            assert_eq!(user.login, login);
        }
    }

    #[test]
    fn test_empty_login_rejected() {
        assert_eq!(rejected_codes(CreateUser::with_login(""), "login"), ["length"]);
    }

    #[test]
    fn test_overlong_login_rejected() {
        let login = "a".repeat(LOGIN_MAX_CHARS + 1);
        assert_eq!(rejected_codes(CreateUser::with_login(login), "login"), ["length"]);
    }

    #[test]
    fn test_missing_login_rejected() {
        assert_eq!(rejected_codes(CreateUser::default(), "login"), ["required"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let login = "é".repeat(LOGIN_MAX_CHARS);
        assert!(login.len() > LOGIN_MAX_CHARS);
        assert!(NewUser::try_from(CreateUser::with_login(login)).is_ok());
    }

    #[test]
    fn test_client_id_rejected() {
        let input = CreateUser {
            id: Some(7),
            ..CreateUser::with_login("alice")
        };
        assert_eq!(rejected_codes(input, "id"), ["id_not_allowed"]);
    }

    #[test]
    fn test_null_and_absent_fields_deserialize() {
        let input: CreateUser = serde_json::from_str(r#"{"id":null,"login":"bob"}"#).unwrap();
        assert_eq!(input.id, None);
        assert!(NewUser::try_from(input).is_ok());

        let input: CreateUser = serde_json::from_str("{}").unwrap();
        assert_eq!(input.login, None);
    }

    #[test]
    fn test_user_serializes_as_id_and_login() {
        let json = serde_json::to_value(User {
            id: 1,
            login: "alice".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "login": "alice"}));
    }
}
