use career_hub::workflows::placement::domain::{
    ApplicationId, ApplicationStatus, FilterPrefs, InternshipId, InternshipLevel, InternshipStatus,
    Role, StaffProfile, StudentProfile, User, UserId,
};
use career_hub::workflows::placement::lifecycle::{
    accept_placement, apply, create_internship, delete_internship, register_company_rep,
    request_withdrawal, resolve_withdrawal, review_application, review_company_rep,
    review_internship, InternshipDraft,
};
use career_hub::workflows::placement::{
    listing_views, open_listings_for, HubStore, PlacementError,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

fn student(store: &mut HubStore, id: &str, year: u8, major: &str) -> UserId {
    let user_id = UserId(id.to_string());
    store.put_user(User::new(
        user_id.clone(),
        format!("Student {id}"),
        "password",
        Role::Student(StudentProfile {
            year,
            major: major.to_string(),
        }),
    ));
    user_id
}

/// Staff account plus an approved rep, ready to post.
fn hub_with_rep() -> (HubStore, UserId, UserId) {
    let mut store = HubStore::new();
    let staff = UserId("T1".to_string());
    store.put_user(User::new(
        staff.clone(),
        "Taylor",
        "password",
        Role::Staff(StaffProfile {
            department: "Career Center".to_string(),
        }),
    ));

    let rep = UserId("C1".to_string());
    register_company_rep(
        &mut store,
        rep.clone(),
        "Casey",
        "password",
        "Initech",
        "Engineering",
        "Manager",
    )
    .expect("registration succeeds");
    review_company_rep(&mut store, &staff, &rep, true).expect("approval succeeds");

    (store, staff, rep)
}

fn approved_posting(
    store: &mut HubStore,
    staff: &UserId,
    rep: &UserId,
    level: InternshipLevel,
    slots: u8,
) -> InternshipId {
    let id = create_internship(
        store,
        rep,
        InternshipDraft {
            title: "QA Intern".to_string(),
            description: "Automation work".to_string(),
            level,
            preferred_major: "CSC".to_string(),
            open_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            close_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            slots,
        },
    )
    .expect("posting created");
    review_internship(store, staff, &id, true).expect("posting approved");
    id
}

fn status_of(store: &HubStore, id: &ApplicationId) -> ApplicationStatus {
    store.application(id).expect("application exists").status
}

#[test]
fn filled_posting_disappears_and_other_finalists_stay_successful() {
    let (mut store, staff, rep) = hub_with_rep();
    let posting = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 1);
    let ana = student(&mut store, "S1", 2, "CSC");
    let ben = student(&mut store, "S2", 2, "CSC");

    let first = apply(&mut store, &ana, &posting, today()).expect("ana applies");
    let second = apply(&mut store, &ben, &posting, today()).expect("ben applies");
    review_application(&mut store, &rep, &first, true).expect("ana shortlisted");
    review_application(&mut store, &rep, &second, true).expect("ben shortlisted");

    accept_placement(&mut store, &ana, &first).expect("ana confirms");

    let internship = store.internship(&posting).expect("posting exists");
    assert_eq!(internship.status, InternshipStatus::Filled);
    assert!(!internship.visible);
    assert_eq!(internship.confirmed_count(), 1);

    // the other finalist keeps Successful status but can no longer see
    // the posting in listings
    assert_eq!(status_of(&store, &second), ApplicationStatus::Successful);
    let ben_user = store.user(&ben).expect("ben exists");
    let views = listing_views(&open_listings_for(
        &store,
        ben_user,
        today(),
        &FilterPrefs::default(),
    ));
    assert!(views.is_empty());
}

#[test]
fn first_year_students_only_see_basic_postings() {
    let (mut store, staff, rep) = hub_with_rep();
    let advanced = approved_posting(&mut store, &staff, &rep, InternshipLevel::Advanced, 3);
    let basic = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 3);
    let freshman = student(&mut store, "S1", 1, "CSC");

    let user = store.user(&freshman).expect("freshman exists");
    let visible: Vec<String> = open_listings_for(&store, user, today(), &FilterPrefs::default())
        .iter()
        .map(|posting| posting.id.0.clone())
        .collect();
    assert_eq!(visible, vec![basic.0.clone()]);

    let err = apply(&mut store, &freshman, &advanced, today()).expect_err("blocked");
    assert_eq!(err, PlacementError::InvalidTransition);
    apply(&mut store, &freshman, &basic, today()).expect("basic posting accepts applications");
}

#[test]
fn rep_stops_at_five_postings_until_one_is_deleted() {
    let (mut store, staff, rep) = hub_with_rep();
    for _ in 0..5 {
        approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 2);
    }

    let draft = InternshipDraft {
        title: "One more".to_string(),
        description: "Overflow".to_string(),
        level: InternshipLevel::Basic,
        preferred_major: "CSC".to_string(),
        open_date: None,
        close_date: None,
        slots: 2,
    };
    let err = create_internship(&mut store, &rep, draft.clone()).expect_err("quota enforced");
    assert_eq!(err, PlacementError::LimitReached);

    let victim = store.internships_by_rep(&rep)[0].id.clone();
    delete_internship(&mut store, &rep, &victim).expect("owner deletes");
    create_internship(&mut store, &rep, draft).expect("slot freed");
}

#[test]
fn withdrawal_request_leaves_roster_until_staff_decide() {
    let (mut store, staff, rep) = hub_with_rep();
    let posting = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 3);
    let ana = student(&mut store, "S1", 2, "CSC");

    let application = apply(&mut store, &ana, &posting, today()).expect("applies");
    assert_eq!(store.roster(&posting), vec![ana.clone()]);

    request_withdrawal(&mut store, &ana, &application).expect("request accepted");
    assert_eq!(status_of(&store, &application), ApplicationStatus::WithdrawRequested);
    assert!(store.roster(&posting).is_empty());

    resolve_withdrawal(&mut store, &staff, &application, true).expect("staff approve");
    assert_eq!(status_of(&store, &application), ApplicationStatus::Unsuccessful);
    assert!(store.roster(&posting).is_empty());
}

#[test]
fn rejected_withdrawal_reverts_to_pending_even_from_successful() {
    let (mut store, staff, rep) = hub_with_rep();
    let posting = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 3);
    let ana = student(&mut store, "S1", 2, "CSC");

    let application = apply(&mut store, &ana, &posting, today()).expect("applies");
    review_application(&mut store, &rep, &application, true).expect("shortlisted");

    request_withdrawal(&mut store, &ana, &application).expect("request accepted");
    resolve_withdrawal(&mut store, &staff, &application, false).expect("staff reject");

    // the reversion is always to Pending; the rep must shortlist again
    assert_eq!(status_of(&store, &application), ApplicationStatus::Pending);
    assert_eq!(store.roster(&posting), vec![ana]);
}

#[test]
fn accepting_one_placement_rejects_the_rest_of_the_portfolio() {
    let (mut store, staff, rep) = hub_with_rep();
    let first_posting = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 2);
    let second_posting = approved_posting(&mut store, &staff, &rep, InternshipLevel::Basic, 2);
    let ana = student(&mut store, "S1", 2, "CSC");

    let first = apply(&mut store, &ana, &first_posting, today()).expect("applies");
    let second = apply(&mut store, &ana, &second_posting, today()).expect("applies");
    review_application(&mut store, &rep, &first, true).expect("shortlisted");

    accept_placement(&mut store, &ana, &first).expect("confirms");

    assert!(store.application(&first).expect("exists").is_confirmed_placement());
    assert_eq!(status_of(&store, &second), ApplicationStatus::Unsuccessful);
    assert_eq!(store.accepted_internship(&ana), Some(&first_posting));

    let err = apply(&mut store, &ana, &second_posting, today()).expect_err("placed students stop applying");
    assert_eq!(err, PlacementError::LimitReached);
}
