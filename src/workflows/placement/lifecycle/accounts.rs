use tracing::info;

use super::super::domain::{CompanyRepProfile, FilterPrefs, Role, User, UserId};
use super::super::store::HubStore;
use super::PlacementError;

/// Registers a company representative account. The account starts
/// unapproved and cannot post until staff approve it.
pub fn register_company_rep(
    store: &mut HubStore,
    id: UserId,
    name: &str,
    password: &str,
    company_name: &str,
    department: &str,
    position: &str,
) -> Result<(), PlacementError> {
    let rep = User::new(
        id.clone(),
        name,
        password,
        Role::CompanyRep(CompanyRepProfile {
            company_name: company_name.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            approved: false,
        }),
    );

    store
        .insert_user(rep)
        .map_err(|_| PlacementError::Duplicate)?;
    info!(rep = %id.0, "company rep registered, awaiting approval");
    Ok(())
}

/// Staff decision on a pending rep account: approval unlocks posting,
/// rejection keeps the account but leaves it unapproved. Accounts are
/// never deleted; a rejected rep may be approved on a later review.
pub fn review_company_rep(
    store: &mut HubStore,
    staff_id: &UserId,
    rep_id: &UserId,
    approve: bool,
) -> Result<(), PlacementError> {
    if !store.user(staff_id).is_some_and(User::is_staff) {
        return Err(PlacementError::NotAuthorized);
    }

    let rep = store.user(rep_id).ok_or(PlacementError::NotFound)?;
    match rep.company_rep() {
        Some(profile) if !profile.approved => {}
        Some(_) => return Err(PlacementError::InvalidTransition),
        None => return Err(PlacementError::NotFound),
    }

    if approve {
        let rep = store.user_mut(rep_id).ok_or(PlacementError::NotFound)?;
        if let Some(profile) = rep.company_rep_mut() {
            profile.approved = true;
        }
        info!(rep = %rep_id.0, "company rep approved");
    } else {
        info!(rep = %rep_id.0, "company rep rejected, account kept unapproved");
    }
    Ok(())
}

/// Credential check at session start. Passwords are plaintext, so this
/// is a straight comparison; unknown IDs and wrong passwords are
/// indistinguishable to the caller.
pub fn authenticate<'a>(
    store: &'a HubStore,
    user_id: &UserId,
    password: &str,
) -> Option<&'a User> {
    store.user(user_id).filter(|user| user.password == password)
}

/// Plaintext password overwrite; blank input fails without change.
pub fn change_password(
    store: &mut HubStore,
    user_id: &UserId,
    new_password: &str,
) -> Result<(), PlacementError> {
    if new_password.trim().is_empty() {
        return Err(PlacementError::InvalidTransition);
    }
    let user = store.user_mut(user_id).ok_or(PlacementError::NotFound)?;
    user.password = new_password.trim().to_string();
    Ok(())
}

/// Persists the user's last-used filter strings.
pub fn save_filter_prefs(
    store: &mut HubStore,
    user_id: &UserId,
    prefs: FilterPrefs,
) -> Result<(), PlacementError> {
    let user = store.user_mut(user_id).ok_or(PlacementError::NotFound)?;
    user.filters = prefs;
    Ok(())
}
