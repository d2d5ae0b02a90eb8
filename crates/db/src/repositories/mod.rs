//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod feeding_repo;
pub mod pet_repo;
pub mod pet_toy_repo;
pub mod photo_repo;
pub mod toy_repo;

pub use feeding_repo::FeedingRepo;
pub use pet_repo::PetRepo;
pub use pet_toy_repo::PetToyRepo;
pub use photo_repo::PhotoRepo;
pub use toy_repo::ToyRepo;
