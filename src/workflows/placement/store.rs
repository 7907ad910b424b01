use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{
    Application, ApplicationId, CompanyRepProfile, Internship, InternshipId, InternshipStatus,
    Role, User, UserId,
};

/// In-memory entity store for the whole tracker.
///
/// The application table is the single source of truth for the
/// student/posting relation; applicant rosters, applied lists, and the
/// accepted placement are computed from it instead of being maintained
/// as parallel lists.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HubStore {
    users: BTreeMap<UserId, User>,
    internships: BTreeMap<InternshipId, Internship>,
    applications: BTreeMap<ApplicationId, Application>,
    internship_seq: u64,
    application_seq: u64,
}

impl HubStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- users ----

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Inserts a user, failing on an already-taken ID.
    pub fn insert_user(&mut self, user: User) -> Result<(), User> {
        if self.users.contains_key(&user.id) {
            return Err(user);
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Replaces or inserts a user record, skipping the taken-ID check.
    /// For snapshot loading and seeding.
    pub fn put_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Company rep accounts awaiting staff review.
    pub fn pending_company_reps(&self) -> Vec<&User> {
        self.users
            .values()
            .filter(|user| matches!(&user.role, Role::CompanyRep(CompanyRepProfile { approved: false, .. })))
            .collect()
    }

    // ---- internships ----

    pub fn internship(&self, id: &InternshipId) -> Option<&Internship> {
        self.internships.get(id)
    }

    pub fn internship_mut(&mut self, id: &InternshipId) -> Option<&mut Internship> {
        self.internships.get_mut(id)
    }

    pub fn internships(&self) -> impl Iterator<Item = &Internship> {
        self.internships.values()
    }

    /// Generates the next posting ID ("I" + sequence). Counters only
    /// move forward, even across deletions.
    pub fn next_internship_id(&mut self) -> InternshipId {
        self.internship_seq += 1;
        InternshipId(format!("I{}", self.internship_seq))
    }

    pub fn insert_internship(&mut self, internship: Internship) {
        self.sync_internship_seq(&internship.id);
        self.internships.insert(internship.id.clone(), internship);
    }

    /// Removes a posting and purges every application that referenced
    /// it. Returns the removed posting when it existed.
    pub fn remove_internship(&mut self, id: &InternshipId) -> Option<Internship> {
        let removed = self.internships.remove(id)?;
        self.applications.retain(|_, app| app.internship_id != *id);
        Some(removed)
    }

    pub fn pending_internships(&self) -> Vec<&Internship> {
        self.internships
            .values()
            .filter(|posting| posting.status == InternshipStatus::Pending)
            .collect()
    }

    pub fn internships_by_rep(&self, rep_id: &UserId) -> Vec<&Internship> {
        self.internships
            .values()
            .filter(|posting| posting.company_rep_id == *rep_id)
            .collect()
    }

    /// How many postings a rep currently owns, for the creation limit.
    pub fn created_count(&self, rep_id: &UserId) -> usize {
        self.internships
            .values()
            .filter(|posting| posting.company_rep_id == *rep_id)
            .count()
    }

    // ---- applications ----

    pub fn application(&self, id: &ApplicationId) -> Option<&Application> {
        self.applications.get(id)
    }

    pub fn application_mut(&mut self, id: &ApplicationId) -> Option<&mut Application> {
        self.applications.get_mut(id)
    }

    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.applications.values()
    }

    /// Generates the next application ID ("A" + sequence).
    pub fn next_application_id(&mut self) -> ApplicationId {
        self.application_seq += 1;
        ApplicationId(format!("A{}", self.application_seq))
    }

    pub fn insert_application(&mut self, application: Application) {
        self.sync_application_seq(&application.id);
        self.applications.insert(application.id.clone(), application);
    }

    pub fn applications_by_student(&self, student_id: &UserId) -> Vec<&Application> {
        let mut apps: Vec<&Application> = self
            .applications
            .values()
            .filter(|app| app.student_id == *student_id)
            .collect();
        apps.sort_by_key(|app| numeric_suffix(&app.id.0));
        apps
    }

    pub fn applications_for_internship(&self, internship_id: &InternshipId) -> Vec<&Application> {
        let mut apps: Vec<&Application> = self
            .applications
            .values()
            .filter(|app| app.internship_id == *internship_id)
            .collect();
        apps.sort_by_key(|app| numeric_suffix(&app.id.0));
        apps
    }

    /// Derived applicant roster: students whose application to this
    /// posting is still active. Withdrawal requests and unsuccessful
    /// outcomes drop off immediately.
    pub fn roster(&self, internship_id: &InternshipId) -> Vec<UserId> {
        self.applications_for_internship(internship_id)
            .into_iter()
            .filter(|app| app.status.is_active())
            .map(|app| app.student_id.clone())
            .collect()
    }

    /// Applications counting toward the student's quota.
    pub fn active_application_count(&self, student_id: &UserId) -> usize {
        self.applications
            .values()
            .filter(|app| app.student_id == *student_id && app.status.is_active())
            .count()
    }

    /// The posting whose offer this student confirmed, if any.
    pub fn accepted_internship(&self, student_id: &UserId) -> Option<&InternshipId> {
        self.applications
            .values()
            .find(|app| app.student_id == *student_id && app.is_confirmed_placement())
            .map(|app| &app.internship_id)
    }

    /// Applications awaiting a staff withdrawal decision.
    pub fn withdrawal_requests(&self) -> Vec<&Application> {
        let mut apps: Vec<&Application> = self
            .applications
            .values()
            .filter(|app| app.status == super::domain::ApplicationStatus::WithdrawRequested)
            .collect();
        apps.sort_by_key(|app| numeric_suffix(&app.id.0));
        apps
    }

    // ---- counter sync ----

    fn sync_internship_seq(&mut self, id: &InternshipId) {
        if let Some(n) = numeric_suffix(&id.0) {
            self.internship_seq = self.internship_seq.max(n);
        }
    }

    fn sync_application_seq(&mut self, id: &ApplicationId) {
        if let Some(n) = numeric_suffix(&id.0) {
            self.application_seq = self.application_seq.max(n);
        }
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    let digits = id.trim_start_matches(|c: char| !c.is_ascii_digit());
    digits.parse().ok()
}
