use crate::ids::ProfessionalID;

/// A professional's catalog entry, closed over the fields the browsing engine
/// reads. Presentation-only attributes (photos, bios, service menus) never
/// reach this type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Professional {
    pub id: ProfessionalID,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub instagram: Option<String>,
    pub rating: Option<f32>,
    pub years_experience: Option<u32>,
    /// Manual rank set by the catalog curator. Fractional ranks are kept as
    /// sent. `None` sorts after every ranked entry.
    pub order: Option<f64>,
}

impl Professional {
    pub fn new(id: ProfessionalID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: String::new(),
            location: String::new(),
            instagram: None,
            rating: None,
            years_experience: None,
            order: None,
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_instagram(mut self, handle: impl Into<String>) -> Self {
        self.instagram = Some(handle.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating.is_finite().then_some(rating);
        self
    }

    pub fn with_years_experience(mut self, years: u32) -> Self {
        self.years_experience = Some(years);
        self
    }

    /// Non-finite ranks are treated as unranked.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order.is_finite().then_some(order);
        self
    }

    /// Rating used as a sort key; missing ratings count as zero.
    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    /// Years of experience used as a sort key; missing values count as zero.
    pub fn experience_or_zero(&self) -> u32 {
        self.years_experience.unwrap_or(0)
    }
}
