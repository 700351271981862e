use chrono::{DateTime, TimeZone, Utc};
use listing_wizard::wizard::domain::{
    AvailabilitySection, DetailsSection, LocationSection, Photo, PhotoId, PricingSection,
    SectionPayload,
};
use listing_wizard::wizard::Clock;

/// Pinned time source so persisted `last_saved` stamps are deterministic.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub fn location_payload() -> SectionPayload {
    SectionPayload::Location(LocationSection {
        address: "123 Main St".to_string(),
        city: "NYC".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
        country: "us".to_string(),
        ..LocationSection::default()
    })
}

pub fn details_payload() -> SectionPayload {
    SectionPayload::Details(DetailsSection {
        title: "Nice place".to_string(),
        description: "desc".to_string(),
        ..DetailsSection::default()
    })
}

pub fn pricing_payload() -> SectionPayload {
    SectionPayload::Pricing(PricingSection {
        base_rent: "1200".to_string(),
        ..PricingSection::default()
    })
}

pub fn availability_payload() -> SectionPayload {
    SectionPayload::Availability(AvailabilitySection {
        available_from: "2025-01-01".to_string(),
        max_occupants: Some("2".to_string()),
        ..AvailabilitySection::default()
    })
}

pub fn photo(id: &str) -> Photo {
    Photo {
        id: PhotoId(id.to_string()),
        url: format!("https://images.example.com/{id}.jpg"),
        name: format!("{id}.jpg"),
        size: 1024,
    }
}
