use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of applications a student may hold in an active
/// (Pending or Successful) state at once.
pub const MAX_ACTIVE_APPLICATIONS: usize = 3;

/// Maximum number of postings a company representative may have at once.
pub const MAX_POSTINGS_PER_REP: usize = 5;

/// Slot count bounds for a single posting.
pub const MIN_SLOTS: u8 = 1;
pub const MAX_SLOTS: u8 = 10;

/// Identifier wrapper for user accounts (students, reps, staff).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for internship postings ("I" + sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InternshipId(pub String);

/// Identifier wrapper for submitted applications ("A" + sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Academic level required by a posting. Year 1-2 students are limited
/// to Basic postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl InternshipLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Case-insensitive parse of user or file input. Unknown text is
    /// rejected; callers at the load boundary fall back via
    /// [`InternshipLevel::parse_or_basic`].
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Lenient parse used only when loading seed or snapshot data.
    pub fn parse_or_basic(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::Basic)
    }
}

/// Lifecycle status of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipStatus {
    Pending,
    Approved,
    Rejected,
    Filled,
}

impl InternshipStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Filled => "Filled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "filled" => Some(Self::Filled),
            _ => None,
        }
    }
}

/// Lifecycle status of an application.
///
/// `WithdrawApproved` and `WithdrawRejected` never result from engine
/// transitions (staff decisions resolve to Unsuccessful or Pending) but
/// remain parseable so snapshots written by older tooling still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Successful,
    Unsuccessful,
    WithdrawRequested,
    WithdrawApproved,
    WithdrawRejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Successful => "Successful",
            Self::Unsuccessful => "Unsuccessful",
            Self::WithdrawRequested => "WithdrawRequested",
            Self::WithdrawApproved => "WithdrawApproved",
            Self::WithdrawRejected => "WithdrawRejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let cleaned = value.trim().replace(['_', '-', ' '], "").to_ascii_lowercase();
        match cleaned.as_str() {
            "pending" => Some(Self::Pending),
            "successful" => Some(Self::Successful),
            "unsuccessful" => Some(Self::Unsuccessful),
            "withdrawrequested" => Some(Self::WithdrawRequested),
            "withdrawapproved" => Some(Self::WithdrawApproved),
            "withdrawrejected" => Some(Self::WithdrawRejected),
            _ => None,
        }
    }

    /// Active applications count toward the student's quota and keep the
    /// student on the posting's applicant roster.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Successful)
    }
}

/// Last-used filter strings a user may save between sessions. Blank
/// fields are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPrefs {
    pub status: String,
    pub major: String,
    pub level: String,
    pub company: String,
    pub visibility: String,
    pub close_date: String,
}

/// Student payload of the user sum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub year: u8,
    pub major: String,
}

/// Company representative payload. Reps start unapproved and cannot
/// post until staff approve the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRepProfile {
    pub company_name: String,
    pub department: String,
    pub position: String,
    pub approved: bool,
}

/// Career center staff payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub department: String,
}

/// Role tag with role-specific payload. An account holds exactly one
/// role for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student(StudentProfile),
    CompanyRep(CompanyRepProfile),
    Staff(StaffProfile),
}

impl Role {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student(_) => "Student",
            Self::CompanyRep(_) => "CompanyRep",
            Self::Staff(_) => "Staff",
        }
    }
}

/// A user account. Passwords are stored and compared in plaintext; the
/// tracker makes no attempt at credential security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password: String,
    pub filters: FilterPrefs,
    pub role: Role,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            filters: FilterPrefs::default(),
            role,
        }
    }

    pub fn student(&self) -> Option<&StudentProfile> {
        match &self.role {
            Role::Student(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn company_rep(&self) -> Option<&CompanyRepProfile> {
        match &self.role {
            Role::CompanyRep(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn company_rep_mut(&mut self) -> Option<&mut CompanyRepProfile> {
        match &mut self.role {
            Role::CompanyRep(profile) => Some(profile),
            _ => None,
        }
    }

    pub const fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff(_))
    }
}

/// An internship posting created by a company representative.
///
/// `slots` and `confirmed_count` are private so the 1..=10 and
/// 0..=slots clamps hold on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: InternshipId,
    pub title: String,
    pub description: String,
    pub level: InternshipLevel,
    pub preferred_major: String,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub company_name: String,
    pub company_rep_id: UserId,
    pub status: InternshipStatus,
    pub visible: bool,
    slots: u8,
    confirmed_count: u8,
}

impl Internship {
    /// Builds a freshly created posting: Pending, invisible, no
    /// confirmed placements.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: InternshipId,
        title: impl Into<String>,
        description: impl Into<String>,
        level: InternshipLevel,
        preferred_major: impl Into<String>,
        open_date: Option<NaiveDate>,
        close_date: Option<NaiveDate>,
        company_name: impl Into<String>,
        company_rep_id: UserId,
        slots: u8,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            level,
            preferred_major: preferred_major.into(),
            open_date,
            close_date,
            company_name: company_name.into(),
            company_rep_id,
            status: InternshipStatus::Pending,
            visible: false,
            slots: slots.clamp(MIN_SLOTS, MAX_SLOTS),
            confirmed_count: 0,
        }
    }

    pub const fn slots(&self) -> u8 {
        self.slots
    }

    pub const fn confirmed_count(&self) -> u8 {
        self.confirmed_count
    }

    pub fn set_slots(&mut self, slots: u8) {
        self.slots = slots.clamp(MIN_SLOTS, MAX_SLOTS);
        if self.confirmed_count > self.slots {
            self.confirmed_count = self.slots;
        }
    }

    /// Restores a persisted confirmed count, clamped to 0..=slots.
    pub fn set_confirmed_count(&mut self, count: u8) {
        self.confirmed_count = count.min(self.slots);
    }

    /// Records one more accepted placement. Reaching the slot limit
    /// marks the posting Filled, which also hides it.
    pub fn increment_confirmed(&mut self) {
        if self.confirmed_count < self.slots {
            self.confirmed_count += 1;
            if self.confirmed_count >= self.slots {
                self.mark_filled();
            }
        }
    }

    pub fn mark_filled(&mut self) {
        self.status = InternshipStatus::Filled;
        self.visible = false;
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Whether the posting accepts applications on `today`: Approved,
    /// visible, and inside the open/close window (absent bounds are
    /// unconstrained).
    pub fn is_open_on(&self, today: NaiveDate) -> bool {
        if self.status != InternshipStatus::Approved || !self.visible {
            return false;
        }
        if self.open_date.is_some_and(|open| today < open) {
            return false;
        }
        if self.close_date.is_some_and(|close| today > close) {
            return false;
        }
        true
    }
}

/// A student's application to one posting. The canonical record of the
/// student/posting relation; roster and applied lists are derived from
/// the application table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub internship_id: InternshipId,
    pub student_id: UserId,
    pub status: ApplicationStatus,
    pub confirmed_by_student: bool,
}

impl Application {
    pub fn new(id: ApplicationId, internship_id: InternshipId, student_id: UserId) -> Self {
        Self {
            id,
            internship_id,
            student_id,
            status: ApplicationStatus::Pending,
            confirmed_by_student: false,
        }
    }

    /// A confirmed Successful application consumes one slot.
    pub const fn is_confirmed_placement(&self) -> bool {
        self.confirmed_by_student && matches!(self.status, ApplicationStatus::Successful)
    }
}
