use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Draft, PricingSection, PropertyType};
use super::registry::StepRegistry;
use super::validation;

/// One row of the progress indicator.
#[derive(Debug, Clone, Serialize)]
pub struct StepProgressView {
    pub index: usize,
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub complete: bool,
    pub current: bool,
}

/// Serializable projection of the wizard state for the preview pane and
/// progress indicator. Everything the presentation layer renders comes from
/// here; it never reaches into the draft directly.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_line: Option<String>,
    pub current_step: usize,
    pub steps: Vec<StepProgressView>,
    pub amenity_count: usize,
    pub photo_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_url: Option<String>,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

impl WizardSnapshot {
    pub(crate) fn capture(draft: &Draft, registry: &StepRegistry) -> Self {
        let form = &draft.form_data;
        let steps = registry
            .steps()
            .iter()
            .map(|step| StepProgressView {
                index: step.index,
                key: step.key,
                title: step.title,
                icon: step.icon,
                complete: validation::step_valid(draft, step.index),
                current: step.index == draft.current_step,
            })
            .collect();

        let cover_photo_url = form.cover_photo.as_ref().and_then(|cover| {
            form.photos
                .iter()
                .find(|photo| &photo.id == cover)
                .map(|photo| photo.url.clone())
        });

        Self {
            property_type: draft.property_type.map(PropertyType::label),
            title: form.details.as_ref().map(|details| details.title.clone()),
            location_line: form.location.as_ref().map(|location| {
                let mut line = location.address.clone();
                if !location.city.trim().is_empty() {
                    line.push_str(", ");
                    line.push_str(&location.city);
                }
                line
            }),
            rent_line: form.pricing.as_ref().map(rent_line),
            current_step: draft.current_step,
            steps,
            amenity_count: form.amenities.len(),
            photo_count: form.photos.len(),
            cover_photo_url,
            complete: validation::is_complete(draft),
            last_saved: draft.last_saved,
        }
    }
}

fn rent_line(pricing: &PricingSection) -> String {
    format!(
        "{} {} {}",
        pricing.currency.code(),
        pricing.base_rent,
        pricing.rent_period.label()
    )
}

/// The record handed to the caller after a successful publish, once the draft
/// has been destroyed. Consumed by the owner-dashboard hand-off.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedListing {
    pub property_type: PropertyType,
    pub title: String,
    pub location_line: String,
    pub rent_line: String,
    pub amenity_count: usize,
    pub photo_count: usize,
    pub published_at: DateTime<Utc>,
}

impl PublishedListing {
    pub(crate) fn from_draft(draft: Draft, published_at: DateTime<Utc>) -> Self {
        let form = draft.form_data;
        // The publish gate ran before this point; defaults here are
        // unreachable fallbacks rather than real states.
        let location_line = form
            .location
            .map(|location| format!("{}, {}", location.address, location.city))
            .unwrap_or_default();

        Self {
            property_type: draft.property_type.unwrap_or(PropertyType::Apartment),
            title: form
                .details
                .map(|details| details.title)
                .unwrap_or_default(),
            location_line,
            rent_line: form.pricing.as_ref().map(rent_line).unwrap_or_default(),
            amenity_count: form.amenities.len(),
            photo_count: form.photos.len(),
            published_at,
        }
    }
}
