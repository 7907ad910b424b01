//! The lifecycle state machine over postings and applications.
//!
//! Every operation is a total function: guards are checked up front,
//! failures return a [`PlacementError`] with the store untouched, and
//! side effects (cascading rejections, slot accounting, auto-fill) are
//! applied only once all guards pass.

mod accounts;
mod applications;
mod internships;

pub use accounts::{
    authenticate, change_password, register_company_rep, review_company_rep, save_filter_prefs,
};
pub use applications::{
    accept_placement, apply, request_withdrawal, resolve_withdrawal, review_application,
};
pub use internships::{
    create_internship, delete_internship, edit_internship, review_internship, toggle_visibility,
    InternshipDraft, InternshipEdits,
};

/// Failure taxonomy for engine operations. None of these abort the
/// session; callers log and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("record not found")]
    NotFound,
    #[error("actor may not perform this operation")]
    NotAuthorized,
    #[error("transition not allowed from the current status")]
    InvalidTransition,
    #[error("limit reached")]
    LimitReached,
    #[error("record already exists")]
    Duplicate,
}
