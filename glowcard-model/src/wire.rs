//! Permissive wire shapes accepted from the catalog endpoint.
//!
//! Upstream records carry legacy aliases, numbers encoded as strings and
//! nulls where fields are unknown. Everything is optional here, and a field
//! of the wrong JSON type decodes as invalid instead of failing the record.
//! One bad record never fails the response. The conversion into
//! [`Professional`] is the single place defaults are applied.

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::{ModelError, Result};
use crate::ids::ProfessionalID;
use crate::professional::Professional;

/// Body of a catalog response: either a bare array or a `{ "data": [...] }`
/// envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    List(Vec<RecordSlot>),
    Envelope { data: Vec<RecordSlot> },
}

impl CatalogResponse {
    /// Entries that are not records at all come back empty, so the id check
    /// in [`ProfessionalRecord::into_professional`] rejects them one by one.
    pub fn into_records(self) -> Vec<ProfessionalRecord> {
        let slots = match self {
            CatalogResponse::List(slots) => slots,
            CatalogResponse::Envelope { data } => data,
        };
        slots.into_iter().map(RecordSlot::into_record).collect()
    }
}

/// One array entry of a catalog response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordSlot {
    Record(ProfessionalRecord),
    /// Not an object, or an object with conflicting keys.
    Malformed(IgnoredAny),
}

impl RecordSlot {
    pub fn into_record(self) -> ProfessionalRecord {
        match self {
            RecordSlot::Record(record) => record,
            RecordSlot::Malformed(_) => ProfessionalRecord::default(),
        }
    }
}

/// A value of the expected type, or anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    pub fn into_valid(self) -> Option<T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }
}

impl From<&str> for Lenient<String> {
    fn from(text: &str) -> Self {
        Lenient::Valid(text.to_string())
    }
}

/// Text that some sources send as a JSON number (numeric ids).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Text(String),
    Integer(i64),
    /// Floats, booleans, arrays and objects.
    Invalid(IgnoredAny),
}

impl LooseText {
    fn into_string(self) -> Option<String> {
        match self {
            LooseText::Text(text) => Some(text),
            LooseText::Integer(value) => Some(value.to_string()),
            LooseText::Invalid(_) => None,
        }
    }
}

impl From<&str> for LooseText {
    fn from(text: &str) -> Self {
        LooseText::Text(text.to_string())
    }
}

/// A number that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Invalid(IgnoredAny),
}

impl LooseNumber {
    /// Finite numeric value, or `None` for unparsable text, NaN, infinities
    /// and non-numeric JSON.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(value) => *value,
            LooseNumber::Text(text) => text.trim().parse::<f64>().ok()?,
            LooseNumber::Invalid(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfessionalRecord {
    #[serde(alias = "_id")]
    pub id: Option<LooseText>,
    pub name: Option<Lenient<String>>,
    pub specialty: Option<Lenient<String>>,
    pub location: Option<Lenient<String>>,
    #[serde(alias = "instagramHandle")]
    pub instagram: Option<Lenient<String>>,
    pub rating: Option<LooseNumber>,
    #[serde(alias = "experience")]
    pub years_experience: Option<LooseNumber>,
    pub order: Option<LooseNumber>,
}

impl ProfessionalRecord {
    /// Normalize into the closed record. Only a missing, blank or non-textual
    /// id is fatal; any other bad field falls back to its default.
    pub fn into_professional(self) -> Result<Professional> {
        let raw_id = self.id.and_then(LooseText::into_string).ok_or_else(|| {
            ModelError::InvalidRecord("missing id".to_string())
        })?;
        let id = ProfessionalID::new(raw_id)?;

        let years_experience = number(self.years_experience)
            .filter(|years| *years >= 0.0)
            .map(|years| years.min(f64::from(u32::MAX)) as u32);

        Ok(Professional {
            id,
            name: clean_text(self.name),
            specialty: clean_text(self.specialty),
            location: clean_text(self.location),
            instagram: Some(clean_text(self.instagram))
                .filter(|handle| !handle.is_empty()),
            rating: number(self.rating)
                .map(|rating| rating as f32)
                .filter(|rating| rating.is_finite()),
            years_experience,
            order: number(self.order),
        })
    }
}

fn number(value: Option<LooseNumber>) -> Option<f64> {
    value.as_ref().and_then(LooseNumber::as_f64)
}

fn clean_text(value: Option<Lenient<String>>) -> String {
    match value.and_then(Lenient::into_valid) {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.len() == text.len() {
                text
            } else {
                trimmed.to_string()
            }
        }
        None => String::new(),
    }
}
