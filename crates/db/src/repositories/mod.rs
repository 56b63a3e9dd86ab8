//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod exhibit_repo;
pub mod tour_repo;

pub use exhibit_repo::ExhibitRepo;
pub use tour_repo::TourRepo;
