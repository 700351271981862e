pub mod domain;
pub mod store;
pub mod validation;

mod controller;
mod preview;
mod registry;

pub use controller::{Clock, ListingWizard, SystemClock, WizardError, MAX_PHOTOS};
pub use preview::{PublishedListing, StepProgressView, WizardSnapshot};
pub use registry::{SectionKind, StepDefinition, StepRegistry, STEP_COUNT};
