//! Internship placement tracking: the entity store, the eligibility
//! rules deciding what a student may see, and the lifecycle state
//! machine governing posting and application status transitions.

pub mod domain;
pub mod eligibility;
pub mod lifecycle;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, CompanyRepProfile, FilterPrefs, Internship,
    InternshipId, InternshipLevel, InternshipStatus, Role, StaffProfile, StudentProfile, User,
    UserId,
};
pub use eligibility::{filtered_listings, listing_views, open_listings_for, ListingView};
pub use lifecycle::{InternshipDraft, InternshipEdits, PlacementError};
pub use store::HubStore;
