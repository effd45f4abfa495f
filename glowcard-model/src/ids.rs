use crate::error::{ModelError, Result};

/// Strongly typed ID for catalog professionals.
///
/// Upstream ids are opaque strings (some sources send numbers, which the wire
/// layer stringifies). Blank ids are rejected so every record in a catalog can
/// be addressed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "String", into = "String")
)]
pub struct ProfessionalID(String);

impl ProfessionalID {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRecord(
                "professional id cannot be empty".to_string(),
            ));
        }
        if trimmed.len() == id.len() {
            Ok(ProfessionalID(id))
        } else {
            Ok(ProfessionalID(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "uuid")]
impl ProfessionalID {
    /// Ids minted locally (sample data) are UUIDs in hyphenated form.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        ProfessionalID(uuid.hyphenated().to_string())
    }
}

impl TryFrom<String> for ProfessionalID {
    type Error = ModelError;

    fn try_from(id: String) -> Result<Self> {
        ProfessionalID::new(id)
    }
}

impl From<ProfessionalID> for String {
    fn from(id: ProfessionalID) -> Self {
        id.0
    }
}

impl AsRef<str> for ProfessionalID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfessionalID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
