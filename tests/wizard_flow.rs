mod common;

use std::sync::Arc;

use common::*;
use listing_wizard::wizard::domain::{PhotoId, PropertyType, SectionPayload};
use listing_wizard::wizard::store::{DraftStore, MemoryDraftStore};
use listing_wizard::wizard::validation::Requirement;
use listing_wizard::wizard::{ListingWizard, WizardError, MAX_PHOTOS};

fn open_wizard() -> (
    ListingWizard<Arc<MemoryDraftStore>, FixedClock>,
    Arc<MemoryDraftStore>,
) {
    let store = Arc::new(MemoryDraftStore::new());
    let wizard = ListingWizard::open_with_clock(store.clone(), FixedClock(fixed_instant()))
        .expect("wizard opens on an empty store");
    (wizard, store)
}

fn fill_required_sections(wizard: &mut ListingWizard<Arc<MemoryDraftStore>, FixedClock>) {
    wizard.select_property_type(PropertyType::Apartment);
    wizard.apply_change(location_payload());
    wizard.apply_change(details_payload());
    wizard.apply_change(pricing_payload());
    wizard.apply_change(availability_payload());
}

#[test]
fn completed_draft_publishes_and_destroys_the_stored_record() {
    let (mut wizard, store) = open_wizard();
    fill_required_sections(&mut wizard);

    assert!(wizard.is_complete());
    let listing = wizard.publish().expect("complete listing publishes");

    assert_eq!(listing.property_type, PropertyType::Apartment);
    assert_eq!(listing.title, "Nice place");
    assert_eq!(listing.location_line, "123 Main St, NYC");
    assert_eq!(listing.rent_line, "USD 1200 per month");

    assert!(
        store.load().expect("load succeeds").is_none(),
        "publish must clear the stored draft"
    );
    assert_eq!(wizard.current_step(), 0, "wizard resets to a fresh draft");
    assert!(wizard.property_type().is_none());
}

#[test]
fn publish_without_pricing_fails_and_keeps_the_draft() {
    let (mut wizard, store) = open_wizard();
    wizard.select_property_type(PropertyType::Apartment);
    wizard.apply_change(location_payload());
    wizard.apply_change(details_payload());
    wizard.apply_change(availability_payload());

    match wizard.publish() {
        Err(WizardError::Incomplete { missing }) => {
            assert_eq!(missing, vec![Requirement::BaseRent]);
        }
        other => panic!("expected incomplete error, got {other:?}"),
    }

    let stored = store
        .load()
        .expect("load succeeds")
        .expect("draft still persisted after a denied publish");
    assert_eq!(stored.property_type, Some(PropertyType::Apartment));
}

#[test]
fn publish_gate_is_blind_to_amenities_and_photos() {
    let (mut wizard, _store) = open_wizard();
    fill_required_sections(&mut wizard);

    assert!(wizard.draft().form_data.amenities.is_empty());
    assert!(wizard.draft().form_data.photos.is_empty());
    assert!(wizard.publish().is_ok());
}

#[test]
fn first_photo_becomes_cover_and_removal_falls_back() {
    let (mut wizard, _store) = open_wizard();

    wizard.add_photo(photo("p1"));
    wizard.add_photo(photo("p2"));
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p1".to_string()))
    );

    wizard.remove_photo(&PhotoId("p1".to_string()));
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p2".to_string()))
    );

    wizard.remove_photo(&PhotoId("p2".to_string()));
    assert_eq!(wizard.draft().form_data.cover_photo, None);
}

#[test]
fn cover_photo_stays_consistent_under_wholesale_replacement() {
    let (mut wizard, _store) = open_wizard();
    wizard.add_photo(photo("p1"));
    wizard.add_photo(photo("p2"));

    // Replace the sequence without the current cover.
    wizard.apply_change(SectionPayload::Photos(vec![photo("p3"), photo("p4")]));
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p3".to_string()))
    );

    // Assigning an unknown cover is ignored.
    wizard.apply_change(SectionPayload::CoverPhoto(Some(PhotoId(
        "p9".to_string(),
    ))));
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p3".to_string()))
    );

    wizard.apply_change(SectionPayload::CoverPhoto(Some(PhotoId(
        "p4".to_string(),
    ))));
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p4".to_string()))
    );
}

#[test]
fn photo_uploads_stop_at_the_cap_and_reject_duplicates() {
    let (mut wizard, _store) = open_wizard();

    for index in 0..MAX_PHOTOS + 3 {
        wizard.add_photo(photo(&format!("p{index}")));
    }
    assert_eq!(wizard.draft().form_data.photos.len(), MAX_PHOTOS);

    let before = wizard.draft().form_data.photos.clone();
    wizard.add_photo(photo("p0"));
    assert_eq!(wizard.draft().form_data.photos, before);
}

#[test]
fn reordering_moves_a_photo_without_touching_the_cover() {
    let (mut wizard, _store) = open_wizard();
    wizard.add_photo(photo("p1"));
    wizard.add_photo(photo("p2"));
    wizard.add_photo(photo("p3"));

    wizard.reorder_photo(2, 0);

    let order: Vec<&str> = wizard
        .draft()
        .form_data
        .photos
        .iter()
        .map(|photo| photo.id.0.as_str())
        .collect();
    assert_eq!(order, vec!["p3", "p1", "p2"]);
    assert_eq!(
        wizard.draft().form_data.cover_photo,
        Some(PhotoId("p1".to_string()))
    );

    // Out-of-range moves are ignored.
    wizard.reorder_photo(0, 9);
    let unchanged: Vec<&str> = wizard
        .draft()
        .form_data
        .photos
        .iter()
        .map(|photo| photo.id.0.as_str())
        .collect();
    assert_eq!(unchanged, vec!["p3", "p1", "p2"]);
}

#[test]
fn advance_is_gated_on_the_current_step_validator() {
    let (mut wizard, _store) = open_wizard();

    // Step 0 invalid until a type is chosen.
    wizard.advance();
    assert_eq!(wizard.current_step(), 0);

    wizard.select_property_type(PropertyType::House);
    wizard.advance();
    assert_eq!(wizard.current_step(), 1);

    // Step 1 invalid until address and city are filled.
    wizard.advance();
    assert_eq!(wizard.current_step(), 1);

    wizard.apply_change(location_payload());
    wizard.advance();
    assert_eq!(wizard.current_step(), 2);

    // Scenario: details.title empty at step 2 denies the advance.
    wizard.advance();
    assert_eq!(wizard.current_step(), 2);
}

#[test]
fn optional_steps_advance_without_input() {
    let (mut wizard, _store) = open_wizard();
    wizard.select_property_type(PropertyType::Room);
    wizard.advance();
    wizard.apply_change(location_payload());
    wizard.advance();
    wizard.apply_change(details_payload());
    wizard.advance();
    assert_eq!(wizard.current_step(), 3);

    // Amenities and photos validate empty.
    wizard.advance();
    assert_eq!(wizard.current_step(), 4);
    wizard.advance();
    assert_eq!(wizard.current_step(), 5);
}

#[test]
fn advance_stops_at_the_last_step() {
    let (mut wizard, _store) = open_wizard();
    fill_required_sections(&mut wizard);
    for _ in 0..10 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), 6);
}

#[test]
fn backward_navigation_is_always_free() {
    let (mut wizard, _store) = open_wizard();
    fill_required_sections(&mut wizard);
    while wizard.current_step() < 5 {
        wizard.advance();
    }

    wizard.retreat();
    assert_eq!(wizard.current_step(), 4);

    wizard.go_to_step(2);
    assert_eq!(wizard.current_step(), 2);

    // Jumping to step 0 is allowed from anywhere, validity aside.
    wizard.go_to_step(0);
    assert_eq!(wizard.current_step(), 0);

    wizard.retreat();
    assert_eq!(wizard.current_step(), 0, "retreat at step 0 is a no-op");
}

#[test]
fn forward_jumps_are_denied_even_when_valid() {
    let (mut wizard, _store) = open_wizard();
    fill_required_sections(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.current_step(), 1);

    // Every intermediate validator passes, the jump is still refused.
    wizard.go_to_step(3);
    assert_eq!(wizard.current_step(), 1);

    wizard.go_to_step(99);
    assert_eq!(wizard.current_step(), 1);
}

#[test]
fn amenity_toggle_adds_then_removes() {
    let (mut wizard, _store) = open_wizard();

    wizard.toggle_amenity("wifi");
    wizard.toggle_amenity("parking");
    wizard.toggle_amenity("wifi");

    assert_eq!(wizard.draft().form_data.amenities, vec!["parking"]);
}

#[test]
fn every_mutation_autosaves() {
    let (mut wizard, store) = open_wizard();

    wizard.select_property_type(PropertyType::Apartment);
    let after_type = store.load().expect("load").expect("autosaved");
    assert_eq!(after_type.property_type, Some(PropertyType::Apartment));

    wizard.advance();
    let after_advance = store.load().expect("load").expect("autosaved");
    assert_eq!(after_advance.current_step, 1);
    assert_eq!(after_advance.last_saved, Some(fixed_instant()));
}

#[test]
fn explicit_save_is_idempotent() {
    let (mut wizard, store) = open_wizard();
    wizard.select_property_type(PropertyType::House);

    wizard.save_draft().expect("first save succeeds");
    let first = store.load().expect("load").expect("record present");

    wizard.save_draft().expect("second save succeeds");
    let second = store.load().expect("load").expect("record present");

    assert_eq!(first, second);
}

#[test]
fn reopening_resumes_the_stored_draft() {
    let store = Arc::new(MemoryDraftStore::new());
    {
        let mut wizard =
            ListingWizard::open_with_clock(store.clone(), FixedClock(fixed_instant()))
                .expect("wizard opens");
        wizard.select_property_type(PropertyType::Room);
        wizard.advance();
        wizard.apply_change(location_payload());
        wizard.advance();
    }

    let resumed = ListingWizard::open_with_clock(store.clone(), FixedClock(fixed_instant()))
        .expect("wizard reopens");
    assert_eq!(resumed.current_step(), 2);
    assert_eq!(resumed.property_type(), Some(PropertyType::Room));
    let location = resumed
        .draft()
        .form_data
        .location
        .as_ref()
        .expect("location restored");
    assert_eq!(location.city, "NYC");
}

#[test]
fn snapshot_reflects_progress_and_gating() {
    let (mut wizard, _store) = open_wizard();
    wizard.select_property_type(PropertyType::Apartment);
    wizard.apply_change(pricing_payload());
    wizard.advance();

    let snapshot = wizard.snapshot();
    assert_eq!(snapshot.property_type, Some("Apartment"));
    assert_eq!(snapshot.current_step, 1);
    assert_eq!(snapshot.rent_line.as_deref(), Some("USD 1200 per month"));
    assert!(!snapshot.complete);

    let flags: Vec<bool> = snapshot.steps.iter().map(|step| step.complete).collect();
    assert_eq!(flags, vec![true, false, false, true, true, true, false]);
    assert!(snapshot.steps[1].current);
}
