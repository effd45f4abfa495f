//! Deterministic sample catalog served when live data is unavailable.

use glowcard_model::{Professional, ProfessionalID};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruna", "Camila", "Débora", "Elisa", "Fernanda", "Gabriela",
    "Helena", "Isabela", "Juliana", "Larissa", "Marina",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barbosa", "Costa", "Duarte", "Esteves", "Ferraz",
];

const SPECIALTIES: &[&str] = &[
    "Lash Designer",
    "Nail Artist",
    "Brow Specialist",
    "Makeup Artist",
    "Hair Stylist",
];

const LOCATIONS: &[&str] = &[
    "São Paulo, SP",
    "Rio de Janeiro, RJ",
    "Belo Horizonte, MG",
    "Curitiba, PR",
];

/// How large the sample catalog is for each pagination mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleCatalogOptions {
    /// Records generated when pagination is enabled, enough for several pages.
    pub paginated_count: usize,
    /// Records generated for the continuous (single page) layout.
    pub continuous_count: usize,
}

impl Default for SampleCatalogOptions {
    fn default() -> Self {
        Self {
            paginated_count: 24,
            continuous_count: 12,
        }
    }
}

impl SampleCatalogOptions {
    pub fn count_for(&self, pagination_enabled: bool) -> usize {
        if pagination_enabled {
            self.paginated_count
        } else {
            self.continuous_count
        }
    }
}

/// Build the sample catalog. The same inputs always yield the same records,
/// ids included.
pub fn sample_catalog(
    pagination_enabled: bool,
    options: &SampleCatalogOptions,
) -> Vec<Professional> {
    (0..options.count_for(pagination_enabled))
        .map(sample_professional)
        .collect()
}

fn sample_id(index: usize) -> ProfessionalID {
    let uuid = Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("glowcard:sample:{index}").as_bytes(),
    );
    ProfessionalID::from_uuid(uuid)
}

fn sample_professional(index: usize) -> Professional {
    let first = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last = LAST_NAMES[(index / FIRST_NAMES.len() + index) % LAST_NAMES.len()];
    let specialty = SPECIALTIES[index % SPECIALTIES.len()];
    let location = LOCATIONS[(index * 3 + 1) % LOCATIONS.len()];

    // Ratings land on 3.5..=5.0 in tenths.
    let rating = 3.5 + ((index * 7) % 16) as f32 / 10.0;
    let years = 1 + ((index * 5) % 15) as u32;
    let handle = format!(
        "@{}.{}",
        deunicode::deunicode(first).to_lowercase(),
        last.to_lowercase()
    );

    let mut pro = Professional::new(sample_id(index), format!("{first} {last}"))
        .with_specialty(specialty)
        .with_location(location)
        .with_instagram(handle)
        .with_rating(rating)
        .with_years_experience(years);

    // The first few cards carry a curated position; the rest fall back to
    // name ordering under the manual sort.
    if index < 4 {
        pro = pro.with_order((index + 1) as f64);
    }
    pro
}
