use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of property being listed. Fixed at step 0 and steering which detail
/// fields are relevant downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Room,
    Apartment,
    House,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Room, Self::Apartment, Self::House]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Room => "Room",
            Self::Apartment => "Apartment",
            Self::House => "House",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "room" => Ok(Self::Room),
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown property type '{0}', expected room, apartment, or house")]
pub struct UnknownPropertyType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Inr,
    Jpy,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentPeriod {
    Monthly,
    Weekly,
    Daily,
}

impl RentPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "per month",
            Self::Weekly => "per week",
            Self::Daily => "per day",
        }
    }
}

impl Default for RentPeriod {
    fn default() -> Self {
        Self::Monthly
    }
}

/// Identifier wrapper for uploaded photos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(pub String);

/// A single uploaded property photo. Sequence position is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub url: String,
    pub name: String,
    pub size: u64,
}

/// Address details collected on the location step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSection {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

/// Title, description, and specification fields. Specification fields are kept
/// as entered; which subset applies depends on the selected property type
/// (whole units use bedrooms/bathrooms, shared rooms use room_size and
/// roommate counts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsSection {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_spaces: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_bathrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_roommates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<String>,
}

/// Rent and fee figures, kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSection {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub rent_period: RentPeriod,
    pub base_rent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_deposit: Option<String>,
}

/// Availability window, lease terms, and house rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySection {
    pub available_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lease_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occupants: Option<String>,
    #[serde(default)]
    pub allow_pets: bool,
    #[serde(default)]
    pub allow_smoking: bool,
    #[serde(default)]
    pub student_friendly: bool,
    #[serde(default)]
    pub professionals_only: bool,
}

/// The per-section contents of the draft. Sections start absent and are
/// replaced wholesale by the owning step; editing one section never touches
/// another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailsSection>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<PhotoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilitySection>,
}

impl FormData {
    /// Reassigns a dangling cover reference to the first remaining photo, or
    /// clears it when no photos remain. A null cover with photos present is
    /// left alone; the cover is only auto-assigned when the first photo lands.
    pub(crate) fn repair_cover_photo(&mut self) {
        match &self.cover_photo {
            Some(id) if self.photos.iter().any(|photo| &photo.id == id) => {}
            Some(_) => self.cover_photo = self.photos.first().map(|photo| photo.id.clone()),
            None => {}
        }
    }
}

/// Wholesale replacement payload for one section of the draft, keyed by the
/// section the emitting step owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "snake_case")]
pub enum SectionPayload {
    Location(LocationSection),
    Details(DetailsSection),
    Amenities(Vec<String>),
    Photos(Vec<Photo>),
    CoverPhoto(Option<PhotoId>),
    Pricing(PricingSection),
    Availability(AvailabilitySection),
}

/// The single persisted aggregate for an in-progress listing. At most one
/// draft exists per owner session; it survives abandonment and is destroyed
/// only by a successful publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub form_data: FormData,
    #[serde(default)]
    pub current_step: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            property_type: None,
            form_data: FormData::default(),
            current_step: 0,
            last_saved: None,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}
