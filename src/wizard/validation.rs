use serde::Serialize;

use super::domain::Draft;
use super::registry::STEP_COUNT;

/// A field the publish gate requires. Amenities and photos are deliberately
/// absent: they are full wizard steps but optional embellishments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    PropertyType,
    Title,
    Description,
    Address,
    City,
    BaseRent,
    AvailableFrom,
}

impl Requirement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PropertyType => "property type",
            Self::Title => "listing title",
            Self::Description => "listing description",
            Self::Address => "street address",
            Self::City => "city",
            Self::BaseRent => "base rent",
            Self::AvailableFrom => "available-from date",
        }
    }

    pub fn join(requirements: &[Requirement]) -> String {
        requirements
            .iter()
            .map(|requirement| requirement.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether the owner may advance past the step at `index`. Absent sections
/// never validate; an out-of-range index never validates.
pub fn step_valid(draft: &Draft, index: usize) -> bool {
    match index {
        0 => draft.property_type.is_some(),
        1 => draft
            .form_data
            .location
            .as_ref()
            .is_some_and(|location| filled(&location.address) && filled(&location.city)),
        2 => draft
            .form_data
            .details
            .as_ref()
            .is_some_and(|details| filled(&details.title) && filled(&details.description)),
        // Amenities and photos are optional sections.
        3 | 4 => true,
        5 => draft
            .form_data
            .pricing
            .as_ref()
            .is_some_and(|pricing| filled(&pricing.base_rent)),
        6 => draft
            .form_data
            .availability
            .as_ref()
            .is_some_and(|availability| filled(&availability.available_from)),
        _ => false,
    }
}

/// Per-step validity flags, indexed by step.
pub fn step_validity(draft: &Draft) -> [bool; STEP_COUNT] {
    let mut flags = [false; STEP_COUNT];
    for (index, flag) in flags.iter_mut().enumerate() {
        *flag = step_valid(draft, index);
    }
    flags
}

/// Publish-gate fields still missing from the draft, in presentation order.
pub fn missing_requirements(draft: &Draft) -> Vec<Requirement> {
    let form = &draft.form_data;
    let mut missing = Vec::new();

    if draft.property_type.is_none() {
        missing.push(Requirement::PropertyType);
    }
    if !form.details.as_ref().is_some_and(|details| filled(&details.title)) {
        missing.push(Requirement::Title);
    }
    if !form
        .details
        .as_ref()
        .is_some_and(|details| filled(&details.description))
    {
        missing.push(Requirement::Description);
    }
    if !form
        .location
        .as_ref()
        .is_some_and(|location| filled(&location.address))
    {
        missing.push(Requirement::Address);
    }
    if !form.location.as_ref().is_some_and(|location| filled(&location.city)) {
        missing.push(Requirement::City);
    }
    if !form
        .pricing
        .as_ref()
        .is_some_and(|pricing| filled(&pricing.base_rent))
    {
        missing.push(Requirement::BaseRent);
    }
    if !form
        .availability
        .as_ref()
        .is_some_and(|availability| filled(&availability.available_from))
    {
        missing.push(Requirement::AvailableFrom);
    }

    missing
}

/// The publish gate: stricter than the step validators combined, but blind to
/// amenities and photos.
pub fn is_complete(draft: &Draft) -> bool {
    missing_requirements(draft).is_empty()
}
