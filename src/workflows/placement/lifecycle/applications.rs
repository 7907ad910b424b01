use chrono::NaiveDate;
use tracing::info;

use super::super::domain::{
    Application, ApplicationId, ApplicationStatus, InternshipId, User, UserId,
};
use super::super::eligibility::{can_apply_more, is_visible_to_student};
use super::super::store::HubStore;
use super::PlacementError;

/// A student applies to a posting. Guards: the posting must be open
/// and visible to this student on `today`, the student must be under
/// quota and unplaced, and no live application for the pair may exist.
pub fn apply(
    store: &mut HubStore,
    student_id: &UserId,
    internship_id: &InternshipId,
    today: NaiveDate,
) -> Result<ApplicationId, PlacementError> {
    let student = store.user(student_id).ok_or(PlacementError::NotFound)?;
    let profile = student.student().ok_or(PlacementError::NotAuthorized)?;

    let internship = store
        .internship(internship_id)
        .ok_or(PlacementError::NotFound)?;
    if !is_visible_to_student(internship, profile, today) {
        return Err(PlacementError::InvalidTransition);
    }
    if !can_apply_more(store, student_id) {
        return Err(PlacementError::LimitReached);
    }

    let duplicate = store.applications_for_internship(internship_id).iter().any(|app| {
        app.student_id == *student_id && app.status != ApplicationStatus::Unsuccessful
    });
    if duplicate {
        return Err(PlacementError::Duplicate);
    }

    let id = store.next_application_id();
    store.insert_application(Application::new(
        id.clone(),
        internship_id.clone(),
        student_id.clone(),
    ));
    info!(application = %id.0, student = %student_id.0, internship = %internship_id.0, "application submitted");
    Ok(id)
}

/// Rep decision on a Pending application to a posting the rep owns:
/// approve to Successful, reject to Unsuccessful.
pub fn review_application(
    store: &mut HubStore,
    rep_id: &UserId,
    application_id: &ApplicationId,
    approve: bool,
) -> Result<(), PlacementError> {
    let application = store
        .application(application_id)
        .ok_or(PlacementError::NotFound)?;
    let internship = store
        .internship(&application.internship_id)
        .ok_or(PlacementError::NotFound)?;
    if internship.company_rep_id != *rep_id {
        return Err(PlacementError::NotAuthorized);
    }
    if application.status != ApplicationStatus::Pending {
        return Err(PlacementError::InvalidTransition);
    }

    let application = store
        .application_mut(application_id)
        .ok_or(PlacementError::NotFound)?;
    application.status = if approve {
        ApplicationStatus::Successful
    } else {
        ApplicationStatus::Unsuccessful
    };
    info!(
        application = %application_id.0,
        status = application.status.label(),
        "application reviewed"
    );
    Ok(())
}

/// The student accepts a Successful offer.
///
/// Confirms the application, consumes one slot (which may auto-fill
/// and hide the posting), and cascades every other application of the
/// student to Unsuccessful: accepting one offer withdraws the rest.
/// Re-running is blocked by the confirmed/placed guards, so the
/// cascade and slot accounting apply exactly once.
pub fn accept_placement(
    store: &mut HubStore,
    student_id: &UserId,
    application_id: &ApplicationId,
) -> Result<(), PlacementError> {
    let application = store
        .application(application_id)
        .ok_or(PlacementError::NotFound)?;
    if application.student_id != *student_id {
        return Err(PlacementError::NotAuthorized);
    }
    if application.status != ApplicationStatus::Successful || application.confirmed_by_student {
        return Err(PlacementError::InvalidTransition);
    }
    if store.accepted_internship(student_id).is_some() {
        return Err(PlacementError::InvalidTransition);
    }

    let internship_id = application.internship_id.clone();

    let application = store
        .application_mut(application_id)
        .ok_or(PlacementError::NotFound)?;
    application.confirmed_by_student = true;

    if let Some(internship) = store.internship_mut(&internship_id) {
        internship.increment_confirmed();
    }

    let other_ids: Vec<ApplicationId> = store
        .applications_by_student(student_id)
        .into_iter()
        .filter(|app| app.id != *application_id)
        .map(|app| app.id.clone())
        .collect();
    for other_id in other_ids {
        if let Some(other) = store.application_mut(&other_id) {
            other.status = ApplicationStatus::Unsuccessful;
        }
    }

    info!(
        application = %application_id.0,
        internship = %internship_id.0,
        "placement accepted, competing applications withdrawn"
    );
    Ok(())
}

/// The student asks to withdraw a Pending or Successful application.
/// The status change takes the student off the posting's roster at
/// once; staff arbitrate the request afterwards. Requesting withdrawal
/// of a confirmed placement also drops the confirmation, so a later
/// re-approval needs a fresh acceptance to count as placed again.
pub fn request_withdrawal(
    store: &mut HubStore,
    student_id: &UserId,
    application_id: &ApplicationId,
) -> Result<(), PlacementError> {
    let application = store
        .application(application_id)
        .ok_or(PlacementError::NotFound)?;
    if application.student_id != *student_id {
        return Err(PlacementError::NotAuthorized);
    }
    if !application.status.is_active() {
        return Err(PlacementError::InvalidTransition);
    }

    let application = store
        .application_mut(application_id)
        .ok_or(PlacementError::NotFound)?;
    application.status = ApplicationStatus::WithdrawRequested;
    application.confirmed_by_student = false;
    info!(application = %application_id.0, "withdrawal requested");
    Ok(())
}

/// Staff decision on a withdrawal request. Approval ends the
/// application as Unsuccessful. Rejection always reverts to Pending,
/// even when the request came from Successful; the rep must shortlist
/// the application again.
pub fn resolve_withdrawal(
    store: &mut HubStore,
    staff_id: &UserId,
    application_id: &ApplicationId,
    approve: bool,
) -> Result<(), PlacementError> {
    if !store.user(staff_id).is_some_and(User::is_staff) {
        return Err(PlacementError::NotAuthorized);
    }

    let application = store
        .application_mut(application_id)
        .ok_or(PlacementError::NotFound)?;
    if application.status != ApplicationStatus::WithdrawRequested {
        return Err(PlacementError::InvalidTransition);
    }

    application.status = if approve {
        ApplicationStatus::Unsuccessful
    } else {
        ApplicationStatus::Pending
    };
    info!(
        application = %application_id.0,
        status = application.status.label(),
        "withdrawal request resolved"
    );
    Ok(())
}
