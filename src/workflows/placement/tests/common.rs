use chrono::NaiveDate;

use crate::workflows::placement::domain::{
    CompanyRepProfile, InternshipId, InternshipLevel, Role, StaffProfile, StudentProfile, User,
    UserId,
};
use crate::workflows::placement::lifecycle::{self, InternshipDraft};
use crate::workflows::placement::store::HubStore;

pub(super) fn staff_id() -> UserId {
    UserId("T1".to_string())
}

pub(super) fn rep_id() -> UserId {
    UserId("C1".to_string())
}

pub(super) fn student(n: u8) -> UserId {
    UserId(format!("S{n}"))
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Store seeded with one staff member, one approved rep at Initech,
/// and three students: S1 (year 1, CSC), S2 (year 3, CSC), S3 (year 3, EEE).
pub(super) fn seeded_store() -> HubStore {
    let mut store = HubStore::new();

    store
        .insert_user(User::new(
            staff_id(),
            "Taylor",
            "password",
            Role::Staff(StaffProfile { department: "Career Center".to_string() }),
        ))
        .expect("staff inserts");

    store
        .insert_user(User::new(
            rep_id(),
            "Casey",
            "password",
            Role::CompanyRep(CompanyRepProfile {
                company_name: "Initech".to_string(),
                department: "Engineering".to_string(),
                position: "Manager".to_string(),
                approved: true,
            }),
        ))
        .expect("rep inserts");

    for (n, year, major) in [(1u8, 1u8, "CSC"), (2, 3, "CSC"), (3, 3, "EEE")] {
        store
            .insert_user(User::new(
                student(n),
                format!("Student {n}"),
                "password",
                Role::Student(StudentProfile { year, major: major.to_string() }),
            ))
            .expect("student inserts");
    }

    store
}

pub(super) fn draft(title: &str, level: InternshipLevel, slots: u8) -> InternshipDraft {
    InternshipDraft {
        title: title.to_string(),
        description: "Hands-on project work".to_string(),
        level,
        preferred_major: "CSC".to_string(),
        open_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid")),
        close_date: Some(NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid")),
        slots,
    }
}

/// Creates a posting through the engine and has staff approve it.
pub(super) fn approved_posting(
    store: &mut HubStore,
    title: &str,
    level: InternshipLevel,
    slots: u8,
) -> InternshipId {
    let id = lifecycle::create_internship(store, &rep_id(), draft(title, level, slots))
        .expect("posting creates");
    lifecycle::review_internship(store, &staff_id(), &id, true).expect("posting approves");
    id
}
