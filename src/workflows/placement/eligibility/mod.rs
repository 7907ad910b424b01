//! Pure predicates deciding which postings a student can see and apply
//! to, plus the free-text multi-criteria filter shared by the staff and
//! company listing screens. Nothing in this module mutates the store.

mod filter;
mod rules;

pub use filter::apply as filter_internships;
pub use rules::{can_apply_more, eligible_level, is_visible_to_student};

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{FilterPrefs, Internship, User};
use super::store::HubStore;

/// Serializable summary of one posting for listing output.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub level: &'static str,
    pub preferred_major: String,
    pub close_date: Option<NaiveDate>,
    pub status: &'static str,
    pub visible: bool,
    pub slots: u8,
    pub confirmed: u8,
}

impl ListingView {
    pub fn from_internship(internship: &Internship) -> Self {
        Self {
            id: internship.id.0.clone(),
            title: internship.title.clone(),
            company: internship.company_name.clone(),
            level: internship.level.label(),
            preferred_major: internship.preferred_major.clone(),
            close_date: internship.close_date,
            status: internship.status.label(),
            visible: internship.visible,
            slots: internship.slots(),
            confirmed: internship.confirmed_count(),
        }
    }
}

/// The postings a student may apply to on `today`, narrowed by the
/// extra criteria and sorted by title. Empty when the student is at
/// quota or already placed, and for non-student callers.
pub fn open_listings_for<'a>(
    store: &'a HubStore,
    student: &User,
    today: NaiveDate,
    extra: &FilterPrefs,
) -> Vec<&'a Internship> {
    let Some(profile) = student.student() else {
        return Vec::new();
    };
    if !can_apply_more(store, &student.id) {
        return Vec::new();
    }

    filter_internships(
        store
            .internships()
            .filter(|internship| is_visible_to_student(internship, profile, today)),
        extra,
    )
}

/// Staff/company view over every posting, narrowed only by the given
/// criteria.
pub fn filtered_listings<'a>(store: &'a HubStore, criteria: &FilterPrefs) -> Vec<&'a Internship> {
    filter_internships(store.internships(), criteria)
}

/// Convenience wrapper for rendering.
pub fn listing_views(internships: &[&Internship]) -> Vec<ListingView> {
    internships
        .iter()
        .map(|internship| ListingView::from_internship(internship))
        .collect()
}
