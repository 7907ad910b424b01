use chrono::NaiveDate;

use super::super::domain::{
    Internship, InternshipLevel, StudentProfile, UserId, MAX_ACTIVE_APPLICATIONS,
};
use super::super::store::HubStore;

/// Year 1-2 students may only take Basic postings; year 3 and up may
/// take any level.
pub fn eligible_level(year: u8, level: InternshipLevel) -> bool {
    year >= 3 || level == InternshipLevel::Basic
}

/// Whether a posting shows up in this student's listing on `today`:
/// visible, Approved, inside the application window, major match
/// (case-insensitive), and level within the student's year.
pub fn is_visible_to_student(
    internship: &Internship,
    student: &StudentProfile,
    today: NaiveDate,
) -> bool {
    internship.is_open_on(today)
        && internship.preferred_major.eq_ignore_ascii_case(&student.major)
        && eligible_level(student.year, internship.level)
}

/// Quota check: fewer than three active applications and no confirmed
/// placement.
pub fn can_apply_more(store: &HubStore, student_id: &UserId) -> bool {
    store.active_application_count(student_id) < MAX_ACTIVE_APPLICATIONS
        && store.accepted_internship(student_id).is_none()
}
