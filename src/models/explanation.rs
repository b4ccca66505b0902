use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::verse::{parse_number, VerseRef};
use crate::utils::error::AppError;

/// Body of `POST /explain`.
///
/// Fields are kept loosely typed so that `"2"` and `2` are both accepted, and so that
/// a missing field and a non-numeric one produce different errors. Only a JSON object
/// carries fields: any other body decodes to an empty request, and a field that is
/// present but `null` stays `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ExplainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surah: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayah: Option<Value>,
}

impl From<Value> for ExplainRequest {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                surah: fields.remove("surah"),
                ayah: fields.remove("ayah"),
            },
            _ => Self::default(),
        }
    }
}

impl ExplainRequest {
    pub fn new(surah: impl Into<Value>, ayah: impl Into<Value>) -> Self {
        Self {
            surah: Some(surah.into()),
            ayah: Some(ayah.into()),
        }
    }

    /// Resolve the request into a validated verse reference
    pub fn verse(&self) -> Result<VerseRef, AppError> {
        let (Some(surah), Some(ayah)) = (&self.surah, &self.ayah) else {
            return Err(AppError::MissingVerse);
        };

        let (Some(surah), Some(ayah)) = (parse_number(surah), parse_number(ayah)) else {
            return Err(AppError::NotANumber);
        };

        Ok(VerseRef::new(surah, ayah)?)
    }
}

/// Successful explanation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Error payload returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
