use super::common::*;
use crate::workflows::placement::domain::{FilterPrefs, UserId};
use crate::workflows::placement::lifecycle::{self, PlacementError};

fn new_rep(store: &mut crate::workflows::placement::store::HubStore, id: &str) -> UserId {
    let rep = UserId(id.to_string());
    lifecycle::register_company_rep(
        store,
        rep.clone(),
        "Dana",
        "password",
        "Hooli",
        "Outreach",
        "Lead",
    )
    .expect("rep registers");
    rep
}

#[test]
fn registration_rejects_taken_ids() {
    let mut store = seeded_store();
    new_rep(&mut store, "C2");
    assert_eq!(
        lifecycle::register_company_rep(
            &mut store,
            UserId("C2".to_string()),
            "Imposter",
            "password",
            "Hooli",
            "Outreach",
            "Lead",
        ),
        Err(PlacementError::Duplicate)
    );
}

#[test]
fn staff_approval_unlocks_posting() {
    let mut store = seeded_store();
    let rep = new_rep(&mut store, "C2");
    assert_eq!(store.pending_company_reps().len(), 1);

    lifecycle::review_company_rep(&mut store, &staff_id(), &rep, true).expect("approves");
    assert!(store.pending_company_reps().is_empty());
    assert!(store.user(&rep).and_then(|u| u.company_rep()).is_some_and(|p| p.approved));

    // approving twice is not a valid transition
    assert_eq!(
        lifecycle::review_company_rep(&mut store, &staff_id(), &rep, true),
        Err(PlacementError::InvalidTransition)
    );
}

#[test]
fn staff_rejection_keeps_the_account_unapproved() {
    let mut store = seeded_store();
    let rep = new_rep(&mut store, "C2");
    lifecycle::review_company_rep(&mut store, &staff_id(), &rep, false).expect("rejects");

    // accounts are never deleted; the rep stays unapproved
    let profile = store.user(&rep).expect("account kept").company_rep().expect("rep profile");
    assert!(!profile.approved);

    // and may be approved on a later review
    lifecycle::review_company_rep(&mut store, &staff_id(), &rep, true).expect("approves later");
    assert!(store.user(&rep).and_then(|u| u.company_rep()).is_some_and(|p| p.approved));
}

#[test]
fn authenticate_compares_the_stored_password() {
    let mut store = seeded_store();
    let user = lifecycle::authenticate(&store, &student(1), "password").expect("signs in");
    assert_eq!(user.id, student(1));

    assert!(lifecycle::authenticate(&store, &student(1), "wrong").is_none());
    assert!(lifecycle::authenticate(&store, &UserId("ghost".to_string()), "password").is_none());

    // a password change takes effect immediately
    lifecycle::change_password(&mut store, &student(1), "hunter2").expect("changes");
    assert!(lifecycle::authenticate(&store, &student(1), "password").is_none());
    assert!(lifecycle::authenticate(&store, &student(1), "hunter2").is_some());
}

#[test]
fn rep_review_is_staff_only_and_targets_reps_only() {
    let mut store = seeded_store();
    let rep = new_rep(&mut store, "C2");

    assert_eq!(
        lifecycle::review_company_rep(&mut store, &student(1), &rep, true),
        Err(PlacementError::NotAuthorized)
    );
    assert_eq!(
        lifecycle::review_company_rep(&mut store, &staff_id(), &student(1), true),
        Err(PlacementError::NotFound)
    );
}

#[test]
fn password_change_requires_non_blank_input() {
    let mut store = seeded_store();
    assert_eq!(
        lifecycle::change_password(&mut store, &student(1), "  "),
        Err(PlacementError::InvalidTransition)
    );

    lifecycle::change_password(&mut store, &student(1), " hunter2 ").expect("changes");
    assert_eq!(store.user(&student(1)).expect("present").password, "hunter2");
}

#[test]
fn filter_prefs_persist_per_user() {
    let mut store = seeded_store();
    let prefs = FilterPrefs {
        level: "Basic".to_string(),
        close_date: "<2025-12-01".to_string(),
        ..FilterPrefs::default()
    };
    lifecycle::save_filter_prefs(&mut store, &student(1), prefs.clone()).expect("saves");
    assert_eq!(store.user(&student(1)).expect("present").filters, prefs);

    assert_eq!(
        lifecycle::save_filter_prefs(&mut store, &UserId("ghost".to_string()), prefs),
        Err(PlacementError::NotFound)
    );
}
