use serde::Serialize;

/// Number of wizard steps; step indices are always in `0..STEP_COUNT`.
pub const STEP_COUNT: usize = 7;

/// Which slice of the draft a step writes. Step 0 writes the property type
/// directly rather than a form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    PropertyType,
    Location,
    Details,
    Amenities,
    Photos,
    Pricing,
    Availability,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepDefinition {
    pub index: usize,
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub section: SectionKind,
}

/// Fixed, ordered catalog of the seven listing-creation steps. Read-only for
/// the life of a session.
#[derive(Debug)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    pub fn standard() -> Self {
        Self {
            steps: standard_steps(),
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}

fn standard_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            index: 0,
            key: "property_type",
            title: "Property Type",
            description: "Select the type of property you want to list",
            icon: "Home",
            section: SectionKind::PropertyType,
        },
        StepDefinition {
            index: 1,
            key: "location",
            title: "Location",
            description: "Provide the property address and location details",
            icon: "MapPin",
            section: SectionKind::Location,
        },
        StepDefinition {
            index: 2,
            key: "details",
            title: "Details",
            description: "Add property specifications and description",
            icon: "FileText",
            section: SectionKind::Details,
        },
        StepDefinition {
            index: 3,
            key: "amenities",
            title: "Amenities",
            description: "Select available amenities and features",
            icon: "Star",
            section: SectionKind::Amenities,
        },
        StepDefinition {
            index: 4,
            key: "photos",
            title: "Photos",
            description: "Upload property photos and images",
            icon: "Camera",
            section: SectionKind::Photos,
        },
        StepDefinition {
            index: 5,
            key: "pricing",
            title: "Pricing",
            description: "Set rental price and additional costs",
            icon: "DollarSign",
            section: SectionKind::Pricing,
        },
        StepDefinition {
            index: 6,
            key: "availability",
            title: "Availability",
            description: "Configure availability and lease terms",
            icon: "Calendar",
            section: SectionKind::Availability,
        },
    ]
}
