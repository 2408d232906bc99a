use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::AppError;

/// A user record as stored and as returned by the API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Bruce")]
    pub first_name: String,
    #[schema(example = "Wayne")]
    pub last_name: String,
    #[schema(example = "Fighting Criminal")]
    pub hobby: String,
}

impl User {
    pub fn new(id: impl Into<String>, fields: UserFields) -> Self {
        Self {
            id: id.into(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            hobby: fields.hobby,
        }
    }

    /// Full overwrite of every non-id field
    pub fn apply(&mut self, fields: UserFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.hobby = fields.hobby;
    }
}

/// Request body for POST /add-user and PUT /update-user/{id}.
///
/// Every field is optional at the wire level so that a missing field reaches
/// `validate` and produces the 400 instead of an extractor error. Only JSON
/// objects are accepted; an array is never read positionally.
#[derive(Debug, Default, Deserialize, Serialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct UserInput {
    #[schema(example = "Bruce")]
    pub first_name: Option<String>,
    #[schema(example = "Wayne")]
    pub last_name: Option<String>,
    #[schema(example = "Fighting Criminal")]
    pub hobby: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInputObject {
    first_name: Option<String>,
    last_name: Option<String>,
    hobby: Option<String>,
}

impl TryFrom<Map<String, Value>> for UserInput {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: UserInputObject = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            hobby: fields.hobby,
        })
    }
}

/// The three mutable fields of a record, all guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub hobby: String,
}

impl UserFields {
    pub fn new(first_name: &str, last_name: &str, hobby: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            hobby: hobby.to_string(),
        }
    }
}

impl UserInput {
    /// Presence check: absent, `null` and `""` are all rejected.
    pub fn validate(self) -> Result<UserFields, AppError> {
        match (
            present(self.first_name),
            present(self.last_name),
            present(self.hobby),
        ) {
            (Some(first_name), Some(last_name), Some(hobby)) => Ok(UserFields {
                first_name,
                last_name,
                hobby,
            }),
            _ => Err(AppError::Validation),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}
