pub mod placement;
pub mod snapshot;
