use chrono::NaiveDate;
use tracing::info;

use super::super::domain::{
    Internship, InternshipId, InternshipLevel, InternshipStatus, User, UserId,
    MAX_POSTINGS_PER_REP,
};
use super::super::store::HubStore;
use super::PlacementError;

/// Fields a company rep supplies when creating a posting.
#[derive(Debug, Clone)]
pub struct InternshipDraft {
    pub title: String,
    pub description: String,
    pub level: InternshipLevel,
    pub preferred_major: String,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub slots: u8,
}

/// Partial edit of a Pending posting; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct InternshipEdits {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<InternshipLevel>,
    pub preferred_major: Option<String>,
    pub open_date: Option<Option<NaiveDate>>,
    pub close_date: Option<Option<NaiveDate>>,
    pub slots: Option<u8>,
}

/// Creates a posting for an approved rep holding fewer than five. The
/// new posting is Pending and invisible until staff review it.
pub fn create_internship(
    store: &mut HubStore,
    rep_id: &UserId,
    draft: InternshipDraft,
) -> Result<InternshipId, PlacementError> {
    let rep = store.user(rep_id).ok_or(PlacementError::NotFound)?;
    let profile = rep.company_rep().ok_or(PlacementError::NotAuthorized)?;
    if !profile.approved {
        return Err(PlacementError::NotAuthorized);
    }
    if store.created_count(rep_id) >= MAX_POSTINGS_PER_REP {
        return Err(PlacementError::LimitReached);
    }

    let company_name = profile.company_name.clone();
    let id = store.next_internship_id();
    let internship = Internship::new(
        id.clone(),
        draft.title,
        draft.description,
        draft.level,
        draft.preferred_major,
        draft.open_date,
        draft.close_date,
        company_name,
        rep_id.clone(),
        draft.slots,
    );
    store.insert_internship(internship);
    info!(internship = %id.0, rep = %rep_id.0, "posting created, pending approval");
    Ok(id)
}

/// Staff decision on a Pending posting. Approval also makes it
/// visible; rejection leaves it hidden.
pub fn review_internship(
    store: &mut HubStore,
    staff_id: &UserId,
    internship_id: &InternshipId,
    approve: bool,
) -> Result<(), PlacementError> {
    if !store.user(staff_id).is_some_and(User::is_staff) {
        return Err(PlacementError::NotAuthorized);
    }

    let internship = store
        .internship_mut(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if internship.status != InternshipStatus::Pending {
        return Err(PlacementError::InvalidTransition);
    }

    if approve {
        internship.status = InternshipStatus::Approved;
        internship.visible = true;
    } else {
        internship.status = InternshipStatus::Rejected;
    }
    info!(
        internship = %internship_id.0,
        status = internship.status.label(),
        "posting reviewed"
    );
    Ok(())
}

/// Applies edits to a posting that is still Pending. Only the owning
/// rep may edit, and only before the staff decision.
pub fn edit_internship(
    store: &mut HubStore,
    rep_id: &UserId,
    internship_id: &InternshipId,
    edits: InternshipEdits,
) -> Result<(), PlacementError> {
    let internship = store
        .internship(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if internship.company_rep_id != *rep_id {
        return Err(PlacementError::NotAuthorized);
    }
    if internship.status != InternshipStatus::Pending {
        return Err(PlacementError::InvalidTransition);
    }

    let internship = store
        .internship_mut(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if let Some(title) = edits.title {
        if !title.trim().is_empty() {
            internship.title = title.trim().to_string();
        }
    }
    if let Some(description) = edits.description {
        if !description.trim().is_empty() {
            internship.description = description.trim().to_string();
        }
    }
    if let Some(level) = edits.level {
        internship.level = level;
    }
    if let Some(major) = edits.preferred_major {
        if !major.trim().is_empty() {
            internship.preferred_major = major.trim().to_string();
        }
    }
    if let Some(open_date) = edits.open_date {
        internship.open_date = open_date;
    }
    if let Some(close_date) = edits.close_date {
        internship.close_date = close_date;
    }
    if let Some(slots) = edits.slots {
        internship.set_slots(slots);
    }
    Ok(())
}

/// Deletes a posting the rep owns, cascading the purge of all of its
/// applications. Allowed in any status.
pub fn delete_internship(
    store: &mut HubStore,
    rep_id: &UserId,
    internship_id: &InternshipId,
) -> Result<(), PlacementError> {
    let internship = store
        .internship(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if internship.company_rep_id != *rep_id {
        return Err(PlacementError::NotAuthorized);
    }

    store.remove_internship(internship_id);
    info!(internship = %internship_id.0, "posting deleted with its applications");
    Ok(())
}

/// Owner-only visibility flip. The engine allows toggling in any
/// status; student listings still require Approved, so flipping a
/// Pending posting on has no student-facing effect.
pub fn toggle_visibility(
    store: &mut HubStore,
    rep_id: &UserId,
    internship_id: &InternshipId,
) -> Result<bool, PlacementError> {
    let internship = store
        .internship(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if internship.company_rep_id != *rep_id {
        return Err(PlacementError::NotAuthorized);
    }

    let internship = store
        .internship_mut(internship_id)
        .ok_or(PlacementError::NotFound)?;
    internship.toggle_visibility();
    Ok(internship.visible)
}
