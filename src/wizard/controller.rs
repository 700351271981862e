use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use super::domain::{Draft, Photo, PhotoId, PropertyType, SectionPayload};
use super::preview::{PublishedListing, WizardSnapshot};
use super::registry::{StepDefinition, StepRegistry, STEP_COUNT};
use super::store::{DraftStore, DraftStoreError};
use super::validation::{self, Requirement};

/// Upload cap mirrored from the photo step's "{n}/20 photos" counter.
pub const MAX_PHOTOS: usize = 20;

/// Time source injected into the controller so `last_saved` stamps are
/// deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Error raised by the wizard's explicit save and publish actions. Navigation
/// and edit denials are silent no-ops, not errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("listing cannot be published, missing: {}", Requirement::join(.missing))]
    Incomplete { missing: Vec<Requirement> },
    #[error(transparent)]
    Store(#[from] DraftStoreError),
}

/// Stateful orchestrator for the seven-step listing creation flow.
///
/// Owns the draft, gates navigation on per-step validity, and autosaves after
/// every mutation. One instance per owner session; the draft it persists is
/// the only shared state, and this controller is its only writer.
pub struct ListingWizard<S: DraftStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    registry: StepRegistry,
    draft: Draft,
}

impl<S: DraftStore> ListingWizard<S> {
    /// Opens the wizard with the system clock, resuming a stored draft when
    /// one exists.
    pub fn open(store: S) -> Result<Self, WizardError> {
        Self::open_with_clock(store, SystemClock)
    }
}

impl<S: DraftStore, C: Clock> ListingWizard<S, C> {
    pub fn open_with_clock(store: S, clock: C) -> Result<Self, WizardError> {
        let registry = StepRegistry::standard();
        let draft = match store.load()? {
            Some(draft) if draft.current_step < registry.len() => {
                info!(step = draft.current_step, "resuming stored listing draft");
                draft
            }
            Some(draft) => {
                warn!(
                    step = draft.current_step,
                    "stored draft points past the last step, starting fresh"
                );
                Draft::new()
            }
            None => Draft::new(),
        };

        Ok(Self {
            store,
            clock,
            registry,
            draft,
        })
    }

    // --- edits -----------------------------------------------------------

    /// Records the property type chosen on step 0.
    pub fn select_property_type(&mut self, property_type: PropertyType) {
        self.draft.property_type = Some(property_type);
        self.autosave();
    }

    /// Replaces one section of the form wholesale. Steps own their section's
    /// internal shape and hand back the complete replacement, never a
    /// field-level patch.
    pub fn apply_change(&mut self, payload: SectionPayload) {
        let form = &mut self.draft.form_data;
        match payload {
            SectionPayload::Location(section) => form.location = Some(section),
            SectionPayload::Details(section) => form.details = Some(section),
            SectionPayload::Amenities(amenities) => form.amenities = amenities,
            SectionPayload::Photos(photos) => {
                form.photos = photos;
                form.repair_cover_photo();
            }
            SectionPayload::CoverPhoto(cover) => match cover {
                None => form.cover_photo = None,
                Some(id) if form.photos.iter().any(|photo| photo.id == id) => {
                    form.cover_photo = Some(id);
                }
                Some(id) => {
                    debug!(photo = %id.0, "ignoring cover assignment to unknown photo");
                    return;
                }
            },
            SectionPayload::Pricing(section) => form.pricing = Some(section),
            SectionPayload::Availability(section) => form.availability = Some(section),
        }
        self.autosave();
    }

    /// Adds an uploaded photo, becoming the cover when it is the first.
    pub fn add_photo(&mut self, photo: Photo) {
        let form = &mut self.draft.form_data;
        if form.photos.len() >= MAX_PHOTOS {
            debug!(photo = %photo.id.0, "photo limit reached, upload ignored");
            return;
        }
        if form.photos.iter().any(|existing| existing.id == photo.id) {
            debug!(photo = %photo.id.0, "duplicate photo id, upload ignored");
            return;
        }

        let first_upload = form.photos.is_empty();
        let id = photo.id.clone();
        form.photos.push(photo);
        if first_upload {
            form.cover_photo = Some(id);
        }
        self.autosave();
    }

    /// Removes a photo; a cover pointing at it falls back to the first
    /// remaining photo, or clears when none remain.
    pub fn remove_photo(&mut self, id: &PhotoId) {
        let form = &mut self.draft.form_data;
        let before = form.photos.len();
        form.photos.retain(|photo| &photo.id != id);
        if form.photos.len() == before {
            return;
        }
        form.repair_cover_photo();
        self.autosave();
    }

    /// Moves a photo within the display order.
    pub fn reorder_photo(&mut self, from: usize, to: usize) {
        let photos = &mut self.draft.form_data.photos;
        if from >= photos.len() || to >= photos.len() || from == to {
            return;
        }
        let photo = photos.remove(from);
        photos.insert(to, photo);
        self.autosave();
    }

    /// Marks an existing photo as the cover; unknown ids are ignored.
    pub fn set_cover_photo(&mut self, id: &PhotoId) {
        let form = &mut self.draft.form_data;
        if !form.photos.iter().any(|photo| &photo.id == id) {
            debug!(photo = %id.0, "ignoring cover assignment to unknown photo");
            return;
        }
        form.cover_photo = Some(id.clone());
        self.autosave();
    }

    /// Adds the amenity when absent, removes it when present.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        let amenities = &mut self.draft.form_data.amenities;
        if let Some(position) = amenities.iter().position(|existing| existing == amenity) {
            amenities.remove(position);
        } else {
            amenities.push(amenity.to_string());
        }
        self.autosave();
    }

    // --- navigation ------------------------------------------------------

    /// Jumps to a step. Backward jumps and a jump to step 0 are always
    /// allowed; forward jumps are not, regardless of validity. Skipping ahead
    /// only happens one step at a time through [`advance`](Self::advance).
    pub fn go_to_step(&mut self, index: usize) {
        if index >= self.registry.len() {
            debug!(index, "step index out of range, navigation ignored");
            return;
        }
        if index <= self.draft.current_step || index == 0 {
            self.draft.current_step = index;
            self.autosave();
        } else {
            debug!(
                index,
                current = self.draft.current_step,
                "forward jump denied"
            );
        }
    }

    /// Moves forward one step when the current step validates; otherwise a
    /// silent no-op, the UI having already disabled the control.
    pub fn advance(&mut self) {
        let current = self.draft.current_step;
        if current >= self.registry.last_index() {
            return;
        }
        if !validation::step_valid(&self.draft, current) {
            debug!(step = current, "current step incomplete, advance denied");
            return;
        }
        self.draft.current_step = current + 1;
        self.autosave();
    }

    /// Moves back one step; a no-op at step 0.
    pub fn retreat(&mut self) {
        if self.draft.current_step == 0 {
            return;
        }
        self.draft.current_step -= 1;
        self.autosave();
    }

    // --- persistence -----------------------------------------------------

    /// Explicit "Save Draft" affordance. Unlike autosave, storage failures
    /// surface to the caller, and the returned stamp backs the user-visible
    /// confirmation.
    pub fn save_draft(&mut self) -> Result<DateTime<Utc>, WizardError> {
        let stamp = self.clock.now();
        self.draft.last_saved = Some(stamp);
        self.store.save(&self.draft)?;
        info!("listing draft saved");
        Ok(stamp)
    }

    /// Final completeness check and hand-off. On success the stored draft is
    /// destroyed and the wizard resets to a fresh draft; on failure the draft
    /// is untouched and remains persisted.
    pub fn publish(&mut self) -> Result<PublishedListing, WizardError> {
        let missing = validation::missing_requirements(&self.draft);
        if !missing.is_empty() {
            return Err(WizardError::Incomplete { missing });
        }

        self.store.clear()?;
        let draft = std::mem::take(&mut self.draft);
        let listing = PublishedListing::from_draft(draft, self.clock.now());
        info!(title = %listing.title, "listing published, draft cleared");
        Ok(listing)
    }

    fn autosave(&mut self) {
        self.draft.last_saved = Some(self.clock.now());
        if let Err(err) = self.store.save(&self.draft) {
            // Save-often design: losing one autosave is acceptable, the next
            // mutation retries the write.
            error!(error = %err, "draft autosave failed");
        }
    }

    // --- reads for the presentation adapter ------------------------------

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.draft.property_type
    }

    pub fn current_step(&self) -> usize {
        self.draft.current_step
    }

    pub fn current_step_definition(&self) -> &StepDefinition {
        // current_step is kept in range by every mutation path.
        &self.registry.steps()[self.draft.current_step]
    }

    pub fn steps(&self) -> &[StepDefinition] {
        self.registry.steps()
    }

    pub fn step_validity(&self) -> [bool; STEP_COUNT] {
        validation::step_validity(&self.draft)
    }

    pub fn is_complete(&self) -> bool {
        validation::is_complete(&self.draft)
    }

    pub fn missing_requirements(&self) -> Vec<Requirement> {
        validation::missing_requirements(&self.draft)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::capture(&self.draft, &self.registry)
    }
}
